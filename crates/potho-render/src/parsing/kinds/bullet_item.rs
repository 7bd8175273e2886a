/// Bullet line type with owned prefix constant.
///
/// Only the exact two-character prefix counts: `*hello` is a paragraph,
/// and leading spaces are not skipped.
pub struct BulletItem;

impl BulletItem {
    /// The prefix that marks a bullet line.
    pub const PREFIX: &'static str = "* ";

    /// Returns the byte offset where bullet content begins, or `None` if the
    /// line is not a bullet line.
    pub fn content_offset(line: &str) -> Option<usize> {
        line.starts_with(Self::PREFIX).then_some(Self::PREFIX.len())
    }
}
