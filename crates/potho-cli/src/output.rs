use potho_render::{
    DisplayBlock, Emitter, HtmlEmitter, RenderOptions, RenderedMessage, Sender, TextEmitter,
};

/// What the CLI rendered: a single text, or a whole chat transcript.
pub enum Rendered {
    Text(Vec<DisplayBlock>),
    Transcript(Vec<RenderedMessage>),
}

impl Rendered {
    pub fn block_count(&self) -> usize {
        match self {
            Rendered::Text(blocks) => blocks.len(),
            Rendered::Transcript(msgs) => msgs.iter().map(|m| m.blocks.len()).sum(),
        }
    }
}

pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::Ai => "ai",
        Sender::User => "user",
    }
}

pub fn to_json(rendered: &Rendered) -> serde_json::Result<String> {
    match rendered {
        Rendered::Text(blocks) => serde_json::to_string_pretty(blocks),
        Rendered::Transcript(msgs) => serde_json::to_string_pretty(msgs),
    }
}

pub fn to_html(rendered: &Rendered, options: &RenderOptions) -> String {
    let emitter = HtmlEmitter::new(options.clone());
    match rendered {
        Rendered::Text(blocks) => emitter.emit(blocks),
        Rendered::Transcript(msgs) => msgs
            .iter()
            .map(|m| {
                format!(
                    "<div class=\"message message-{}\">\n{}</div>\n",
                    sender_label(m.sender),
                    emitter.emit(&m.blocks)
                )
            })
            .collect(),
    }
}

pub fn to_text(rendered: &Rendered, options: &RenderOptions) -> String {
    let emitter = TextEmitter::new(options.clone());
    match rendered {
        Rendered::Text(blocks) => emitter.emit(blocks),
        Rendered::Transcript(msgs) => msgs
            .iter()
            .map(|m| format!("[{}]\n{}", sender_label(m.sender), emitter.emit(&m.blocks)))
            .collect(),
    }
}
