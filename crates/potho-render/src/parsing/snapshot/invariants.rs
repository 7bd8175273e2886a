use crate::parsing::{DisplayBlock, slice::slice};

/// Panics if any block or leaf breaks the lossless-span contract for `text`.
pub fn check(text: &str, blocks: &[DisplayBlock]) {
    let n = text.len();
    let mut prev_block_end = 0usize;

    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (text len: {})",
            b.span,
            n
        );
        assert!(
            b.span.contains(b.content_span),
            "content span not contained in block span: content {:?}, block {:?}",
            b.content_span,
            b.span
        );
        assert!(
            b.span.start >= prev_block_end,
            "blocks out of order: {:?} starts before {}",
            b.span,
            prev_block_end
        );
        assert!(
            !slice(text, b.span).contains('\n'),
            "block span crosses a line break: {:?}",
            b.span
        );
        prev_block_end = b.span.end;

        let mut prev_leaf_end = b.content_span.start;
        for leaf in &b.leaves {
            assert!(
                b.content_span.contains(leaf.span),
                "leaf span {:?} outside content span {:?}",
                leaf.span,
                b.content_span
            );
            assert!(
                leaf.span.start >= prev_leaf_end,
                "leaf {:?} overlaps previous leaf ending at {}",
                leaf.span,
                prev_leaf_end
            );
            assert_eq!(
                slice(text, leaf.span),
                leaf.text,
                "leaf text differs from its source span {:?}",
                leaf.span
            );
            prev_leaf_end = leaf.span.end;
        }
    }
}
