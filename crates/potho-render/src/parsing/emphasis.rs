use super::{kinds::Bold, span::Span};

/// A piece of line content between bold markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Odd position in the split, rendered bold.
    pub emphasized: bool,
    pub span: Span,
}

/// Splits line content on [`Bold::DELIM`] and classifies each piece by its
/// position: even index is normal weight, odd index is emphasized.
///
/// `base` is the byte offset of `content` in the input. Empty pieces are
/// dropped after indexing, so they never shift the parity of what follows.
/// Unbalanced markers are not repaired: `a**b` yields `b` emphasized.
pub fn split_bold(base: usize, content: &str) -> Vec<Segment<'_>> {
    let mut out = vec![];
    let mut offset = base;

    for (i, piece) in content.split(Bold::DELIM).enumerate() {
        let span = Span::at(offset, piece.len());
        offset = span.end + Bold::DELIM.len();
        if piece.is_empty() {
            continue;
        }
        out.push(Segment {
            text: piece,
            emphasized: i % 2 == 1,
            span,
        });
    }

    out
}
