/// Math span delimiters.
///
/// `$$...$$` is block (display) math, `$...$` is inline math. Block is
/// always tried first so `$$x$$` never reads as inline math wrapped around
/// stray dollars.
pub struct MathSpan;

impl MathSpan {
    pub const BLOCK: &'static str = "$$";
    pub const INLINE: &'static str = "$";
}
