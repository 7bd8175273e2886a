use serde::Serialize;

use crate::parsing::{BlockKind, DisplayBlock, Leaf, MathKind, slice::preview};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    pub leaves: Vec<String>,
}

pub fn normalize(text: &str, blocks: &[DisplayBlock]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| BlockSnap {
            kind: match b.kind {
                BlockKind::Paragraph => "Paragraph".to_string(),
                BlockKind::Bullet => "Bullet".to_string(),
            },
            span: (b.span.start, b.span.end),
            text: preview(text, b.span, 80),
            leaves: b.leaves.iter().map(describe_leaf).collect(),
        })
        .collect();

    Snap { blocks }
}

/// One-line description of a leaf, e.g. `Text("a")`, `BoldInline("x")`.
pub fn describe_leaf(leaf: &Leaf) -> String {
    let weight = if leaf.emphasized { "Bold" } else { "" };
    let kind = match leaf.math_kind {
        MathKind::Text => "Text",
        MathKind::Inline => "Inline",
        MathKind::Block => "Block",
    };
    format!("{weight}{kind}({:?})", leaf.text)
}
