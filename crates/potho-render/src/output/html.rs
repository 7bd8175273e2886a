use html_escape::encode_text;

use super::{Emitter, RenderOptions, Theme};
use crate::parsing::{BlockKind, DisplayBlock, Leaf, MathKind};

/// Emits HTML fragments.
///
/// Math is wrapped in `\(...\)` and `\[...\]` inside `math` spans so a
/// client-side math typesetter can pick it up unchanged.
pub struct HtmlEmitter {
    options: RenderOptions,
}

impl HtmlEmitter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn container_class(&self) -> &'static str {
        match self.options.theme {
            Theme::Light => "potho-markdown",
            Theme::Dark => "potho-markdown dark",
        }
    }

    fn leaves(&self, out: &mut String, block: &DisplayBlock) {
        for leaf in &block.leaves {
            self.leaf(out, leaf);
        }
    }
}

impl Default for HtmlEmitter {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Emitter for HtmlEmitter {
    fn leaf(&self, out: &mut String, leaf: &Leaf) {
        if leaf.emphasized {
            out.push_str("<strong>");
        }
        let text = encode_text(&leaf.text);
        match leaf.math_kind {
            MathKind::Text => out.push_str(&text),
            MathKind::Inline => {
                out.push_str(r#"<span class="math math-inline">\("#);
                out.push_str(&text);
                out.push_str(r"\)</span>");
            }
            MathKind::Block => {
                out.push_str(r#"<span class="math math-display">\["#);
                out.push_str(&text);
                out.push_str(r"\]</span>");
            }
        }
        if leaf.emphasized {
            out.push_str("</strong>");
        }
    }

    fn block(&self, out: &mut String, block: &DisplayBlock) {
        match block.kind {
            BlockKind::Paragraph => {
                out.push_str("<p>");
                self.leaves(out, block);
                out.push_str("</p>\n");
            }
            BlockKind::Bullet => {
                out.push_str(r#"<div class="bullet"><span class="bullet-glyph">"#);
                out.push_str(&encode_text(&self.options.bullet_glyph));
                out.push_str("</span><p>");
                self.leaves(out, block);
                out.push_str("</p></div>\n");
            }
        }
    }

    fn document(&self, out: &mut String, blocks: &[DisplayBlock]) {
        out.push_str(&format!("<div class=\"{}\">\n", self.container_class()));
        for b in blocks {
            self.block(out, b);
        }
        out.push_str("</div>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::render_str;
    use pretty_assertions::assert_eq;

    fn html(s: &str) -> String {
        let mut out = String::new();
        for b in render_str(s) {
            HtmlEmitter::default().block(&mut out, &b);
        }
        out
    }

    #[test]
    fn paragraph_with_bold() {
        assert_eq!(html("a**b**c"), "<p>a<strong>b</strong>c</p>\n");
    }

    #[test]
    fn bullet_row() {
        assert_eq!(
            html("* item"),
            "<div class=\"bullet\"><span class=\"bullet-glyph\">•</span><p>item</p></div>\n"
        );
    }

    #[test]
    fn math_is_wrapped_for_typesetting() {
        assert_eq!(
            html("$x$ $$y$$"),
            concat!(
                r#"<p><span class="math math-inline">\(x\)</span> "#,
                r#"<span class="math math-display">\[y\]</span></p>"#,
                "\n"
            )
        );
    }

    #[test]
    fn text_and_math_are_escaped() {
        assert_eq!(
            html("<b> & $a<b$"),
            "<p>&lt;b&gt; &amp; <span class=\"math math-inline\">\\(a&lt;b\\)</span></p>\n"
        );
    }

    #[test]
    fn dark_theme_marks_container() {
        let emitter = HtmlEmitter::new(RenderOptions {
            theme: Theme::Dark,
            ..RenderOptions::default()
        });
        assert_eq!(
            emitter.emit(&render_str("hi")),
            "<div class=\"potho-markdown dark\">\n<p>hi</p>\n</div>\n"
        );
    }

    #[test]
    fn custom_glyph_is_escaped() {
        let emitter = HtmlEmitter::new(RenderOptions {
            bullet_glyph: "<>".into(),
            ..RenderOptions::default()
        });
        let out = emitter.emit(&render_str("* x"));
        assert!(out.contains("<span class=\"bullet-glyph\">&lt;&gt;</span>"));
    }

    #[test]
    fn empty_document_keeps_container() {
        assert_eq!(
            HtmlEmitter::default().emit(&[]),
            "<div class=\"potho-markdown\">\n</div>\n"
        );
    }
}
