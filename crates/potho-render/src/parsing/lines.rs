use super::{kinds::BulletItem, span::Span};

/// A reference to a single line of the input with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of this line in the input, excluding the `\n` separator.
    pub span: Span,
    /// The line text.
    pub text: &'a str,
}

/// Returns an iterator over `\n`-delimited lines with their byte spans.
///
/// Always yields at least one line: empty input is one empty line, and a
/// trailing `\n` yields a trailing empty line. `\r` is not a separator and
/// stays in the line text.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split('\n').map(move |line| {
        let span = Span::at(offset, line.len());
        offset += line.len() + 1;
        LineRef { span, text: line }
    })
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Full byte span of this line in the input.
    pub line: Span,
    /// Whether the line starts with the bullet prefix.
    pub is_bullet: bool,
    /// Line content with the bullet prefix stripped (raw line otherwise).
    pub content: &'a str,
    /// Byte span of `content` in the input.
    pub content_span: Span,
}

/// Classifies individual lines as bullet or plain lines.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let offset = BulletItem::content_offset(lr.text);
        let idx = offset.unwrap_or(0);

        LineClass {
            line: lr.span,
            is_bullet: offset.is_some(),
            content: &lr.text[idx..],
            content_span: Span {
                start: lr.span.start + idx,
                end: lr.span.end,
            },
        }
    }
}
