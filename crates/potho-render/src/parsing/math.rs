use std::sync::LazyLock;

use regex::Regex;

use super::{kinds::MathSpan, span::Span, types::MathKind};

/// Any character except a line terminator.
const NOT_LINE_END: &str = r"[^\n\r\x{2028}\x{2029}]";

/// `$$...$$` or `$...$`, both non-greedy, block first.
static MATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let block = regex::escape(MathSpan::BLOCK);
    let inline = regex::escape(MathSpan::INLINE);
    let any = NOT_LINE_END;
    Regex::new(&format!("{block}{any}*?{block}|{inline}{any}*?{inline}"))
    .expect("math pattern is a valid regex")
});

/// A piece of a segment: either plain text or the source of a math span
/// with its delimiters removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathToken<'a> {
    pub kind: MathKind,
    pub content: &'a str,
    /// Span of `content` (delimiters excluded).
    pub span: Span,
}

/// Splits a segment into alternating text and math tokens, left to right.
///
/// `base` is the byte offset of `s` in the input. Text between matches that
/// would be empty is discarded. A `$` with no partner never matches, so it
/// stays inside a text token.
pub fn tokenize_math(base: usize, s: &str) -> Vec<MathToken<'_>> {
    let mut out = vec![];
    let mut text_start = 0usize;

    // Helper to flush accumulated text as a Text token
    fn flush_text<'a>(
        out: &mut Vec<MathToken<'a>>,
        base: usize,
        s: &'a str,
        start: usize,
        end: usize,
    ) {
        if end > start {
            out.push(MathToken {
                kind: MathKind::Text,
                content: &s[start..end],
                span: Span::at(base + start, end - start),
            });
        }
    }

    for m in MATH_PATTERN.find_iter(s) {
        flush_text(&mut out, base, s, text_start, m.start());
        out.push(classify_match(base + m.start(), m.as_str()));
        text_start = m.end();
    }

    flush_text(&mut out, base, s, text_start, s.len());
    out
}

/// Classifies a matched math span starting at absolute offset `start`.
///
/// A token that starts and ends with the block delimiter is block math, even
/// the bare `$$` (whose content is empty). Everything else the pattern can
/// match is inline math.
fn classify_match(start: usize, token: &str) -> MathToken<'_> {
    let is_block = token.starts_with(MathSpan::BLOCK) && token.ends_with(MathSpan::BLOCK);
    let (kind, delim) = if is_block {
        (MathKind::Block, MathSpan::BLOCK.len())
    } else {
        (MathKind::Inline, MathSpan::INLINE.len())
    };

    let inner_start = delim.min(token.len());
    let inner_end = token.len().saturating_sub(delim).max(inner_start);

    MathToken {
        kind,
        content: &token[inner_start..inner_end],
        span: Span {
            start: start + inner_start,
            end: start + inner_end,
        },
    }
}
