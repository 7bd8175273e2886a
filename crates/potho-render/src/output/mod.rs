//! # Display Output
//!
//! Callers that lay rendered blocks out as concrete markup.
//!
//! - **`HtmlEmitter`**: `<p>`, bullet rows, `<strong>` and KaTeX-style
//!   `\(...\)` / `\[...\]` math spans, all text escaped
//! - **`TextEmitter`**: plain text with the bullet glyph and re-delimited
//!   markup
//!
//! Both are configured by an explicit [`RenderOptions`] record.

pub mod html;
pub mod options;
pub mod text;

pub use html::HtmlEmitter;
pub use options::{DEFAULT_BULLET_GLYPH, RenderOptions, Theme, UnknownTheme};
pub use text::TextEmitter;

use crate::parsing::{DisplayBlock, Leaf};

/// Maps display blocks onto an output format.
pub trait Emitter {
    /// Writes one leaf.
    fn leaf(&self, out: &mut String, leaf: &Leaf);

    /// Writes one block, including its leaves.
    fn block(&self, out: &mut String, block: &DisplayBlock);

    /// Writes a whole document. Defaults to the blocks in order.
    fn document(&self, out: &mut String, blocks: &[DisplayBlock]) {
        for b in blocks {
            self.block(out, b);
        }
    }

    /// Convenience: emits a document into a fresh string.
    fn emit(&self, blocks: &[DisplayBlock]) -> String {
        let mut out = String::new();
        self.document(&mut out, blocks);
        out
    }
}
