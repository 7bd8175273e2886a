pub mod output;
pub mod parsing;
pub mod transcript;

// Re-export key types for easier usage
pub use output::{Emitter, HtmlEmitter, RenderOptions, TextEmitter, Theme};
pub use parsing::{
    BlockKind, DisplayBlock, Leaf, MathKind, Span, render, render_literal, render_str,
    render_value,
};
pub use transcript::{Message, RenderedMessage, Sender, TranscriptError};
