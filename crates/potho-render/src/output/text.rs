use super::{Emitter, RenderOptions};
use crate::parsing::{
    BlockKind, DisplayBlock, Leaf, MathKind,
    kinds::{Bold, MathSpan},
};

/// Emits plain text, one line per block.
///
/// Bold and math are written back with their delimiters, so output for
/// well-formed input reads like the source with bullets swapped for the
/// glyph.
#[derive(Default)]
pub struct TextEmitter {
    options: RenderOptions,
}

impl TextEmitter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Emitter for TextEmitter {
    fn leaf(&self, out: &mut String, leaf: &Leaf) {
        let delim = match leaf.math_kind {
            MathKind::Text => "",
            MathKind::Inline => MathSpan::INLINE,
            MathKind::Block => MathSpan::BLOCK,
        };
        if leaf.emphasized {
            out.push_str(Bold::DELIM);
        }
        out.push_str(delim);
        out.push_str(&leaf.text);
        out.push_str(delim);
        if leaf.emphasized {
            out.push_str(Bold::DELIM);
        }
    }

    fn block(&self, out: &mut String, block: &DisplayBlock) {
        if block.kind == BlockKind::Bullet {
            out.push_str(&self.options.bullet_glyph);
            out.push(' ');
        }
        for leaf in &block.leaves {
            self.leaf(out, leaf);
        }
        out.push('\n');
    }
}
