use serde::Serialize;

use super::span::Span;

/// How a leaf's text should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MathKind {
    /// Literal text run.
    #[default]
    Text,
    /// Math rendered inline with surrounding text (`$...$`).
    Inline,
    /// Standalone, centered math (`$$...$$`).
    Block,
}

/// The kind of a display block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Any line that is not a bullet line, including empty lines.
    Paragraph,
    /// A line starting with `* `, displayed with a bullet glyph.
    Bullet,
}

/// The smallest unit of renderer output.
///
/// `text` is exactly the input slice at `span`: delimiters (`**`, `$`, `$$`,
/// `* `) are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaf {
    pub text: String,
    /// Bold weight.
    pub emphasized: bool,
    pub math_kind: MathKind,
    pub span: Span,
}

impl Leaf {
    /// A literal text leaf with normal weight.
    pub fn plain(text: &str, span: Span) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
            math_kind: MathKind::Text,
            span,
        }
    }
}

/// One rendered line: a paragraph or a bullet item with its leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Byte span of the whole line (without the `\n`).
    pub span: Span,
    /// Byte span of the line after the bullet prefix.
    pub content_span: Span,
    #[serde(rename = "spans")]
    pub leaves: Vec<Leaf>,
}

impl DisplayBlock {
    /// Concatenated leaf text, delimiters excluded.
    pub fn plain_text(&self) -> String {
        self.leaves.iter().map(|l| l.text.as_str()).collect()
    }
}
