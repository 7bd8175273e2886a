//! # Text Rendering
//!
//! Turns AI reply text written in a small markdown dialect into typed
//! display blocks.
//!
//! ## Pipeline
//!
//! text → `\n` lines → bullet/paragraph classification → `**` bold split
//! → `$$`/`$` math split → [`DisplayBlock`]s with [`Leaf`]s.
//!
//! Each stage only sees the output of the previous one, so math never pairs
//! across a bold marker and bold never pairs across a line.
//!
//! ## Modules
//!
//! - **`lines`**: line splitting with spans, [`LineClassifier`]
//! - **`emphasis`**: `split_bold()` positional-parity bold segments
//! - **`math`**: `tokenize_math()` block/inline math extraction
//! - **`kinds`**: marker types owning the delimiters
//! - **`types`**: [`DisplayBlock`], [`Leaf`], [`BlockKind`], [`MathKind`]
//! - **`snapshot`**: invariant checks and normalised views for tests
//!
//! ## Tolerance
//!
//! Rendering never fails. An unmatched `**`, `$` or `$$` is left as literal
//! text (or flips the weight of what follows, for `**`).

pub mod emphasis;
pub mod kinds;
pub mod lines;
pub mod math;
pub mod slice;
pub mod snapshot;
pub mod span;
pub mod types;

use serde_json::Value;

use emphasis::split_bold;
use lines::{LineClass, LineClassifier, lines_with_spans};
use math::tokenize_math;

pub use span::Span;
pub use types::{BlockKind, DisplayBlock, Leaf, MathKind};

/// Renders optional text. Absent text renders to no blocks at all.
pub fn render(text: Option<&str>) -> Vec<DisplayBlock> {
    text.map(render_str).unwrap_or_default()
}

/// Renders text into one display block per `\n`-delimited line.
pub fn render_str(text: &str) -> Vec<DisplayBlock> {
    let classifier = LineClassifier;
    lines_with_spans(text)
        .map(|lr| build_block(&classifier.classify(&lr)))
        .collect()
}

/// Renders a dynamically typed value. Only strings produce output; `null`,
/// numbers, booleans, arrays and objects render to no blocks.
pub fn render_value(value: &Value) -> Vec<DisplayBlock> {
    match value {
        Value::String(s) => render_str(s),
        other => {
            log::debug!("ignoring non-string text value: {}", value_kind(other));
            vec![]
        }
    }
}

/// Renders text without interpreting any markup: one paragraph per line
/// with a single literal leaf (none for an empty line).
pub fn render_literal(text: &str) -> Vec<DisplayBlock> {
    lines_with_spans(text)
        .map(|lr| DisplayBlock {
            kind: BlockKind::Paragraph,
            span: lr.span,
            content_span: lr.span,
            leaves: if lr.text.is_empty() {
                vec![]
            } else {
                vec![Leaf::plain(lr.text, lr.span)]
            },
        })
        .collect()
}

fn build_block(lc: &LineClass<'_>) -> DisplayBlock {
    let leaves = split_bold(lc.content_span.start, lc.content)
        .into_iter()
        .flat_map(|seg| {
            tokenize_math(seg.span.start, seg.text)
                .into_iter()
                .map(move |tok| Leaf {
                    text: tok.content.to_string(),
                    emphasized: seg.emphasized,
                    math_kind: tok.kind,
                    span: tok.span,
                })
        })
        .collect();

    DisplayBlock {
        kind: if lc.is_bullet {
            BlockKind::Bullet
        } else {
            BlockKind::Paragraph
        },
        span: lc.line,
        content_span: lc.content_span,
        leaves,
    }
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
