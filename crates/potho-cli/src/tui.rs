use std::{
    io::{Stdout, stdout},
    path::PathBuf,
};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use potho_config::Config;
use potho_render::{BlockKind, DisplayBlock, Leaf, MathKind, Theme};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::output::{Rendered, sender_label};

type Term = Terminal<CrosstermBackend<Stdout>>;

struct Palette {
    base: Style,
    math: Style,
    label: Style,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                math: Style::default().fg(Color::Blue).add_modifier(Modifier::ITALIC),
                label: Style::default().fg(Color::Green),
            },
            Theme::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                math: Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
                label: Style::default().fg(Color::LightGreen),
            },
        }
    }
}

struct App {
    rendered: Rendered,
    config: Config,
    config_path: PathBuf,
    scroll: u16,
    status: String,
}

impl App {
    fn toggle_theme(&mut self) {
        let theme = self.config.toggle_theme();
        self.status = match self.config.save_to_path(&self.config_path) {
            Ok(()) => format!("Theme: {theme} (saved)"),
            Err(e) => format!("Theme: {theme} (not saved: {e})"),
        };
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let palette = Palette::for_theme(self.config.theme());
        let glyph = &self.config.bullet_glyph;
        match &self.rendered {
            Rendered::Text(blocks) => block_lines(blocks, glyph, &palette),
            Rendered::Transcript(msgs) => msgs
                .iter()
                .flat_map(|m| {
                    let mut lines = vec![Line::from(Span::styled(
                        format!("[{}]", sender_label(m.sender)),
                        palette.label,
                    ))];
                    lines.extend(block_lines(&m.blocks, glyph, &palette));
                    lines.push(Line::default());
                    lines
                })
                .collect(),
        }
    }
}

fn block_lines(blocks: &[DisplayBlock], glyph: &str, palette: &Palette) -> Vec<Line<'static>> {
    blocks
        .iter()
        .map(|b| {
            let mut spans = vec![];
            if b.kind == BlockKind::Bullet {
                spans.push(Span::raw(format!("{glyph} ")));
            }
            spans.extend(b.leaves.iter().map(|l| leaf_span(l, palette)));
            Line::from(spans)
        })
        .collect()
}

fn leaf_span(leaf: &Leaf, palette: &Palette) -> Span<'static> {
    let mut style = match leaf.math_kind {
        MathKind::Text => Style::default(),
        MathKind::Inline | MathKind::Block => palette.math,
    };
    if leaf.emphasized {
        style = style.add_modifier(Modifier::BOLD);
    }
    let text = match leaf.math_kind {
        MathKind::Block => format!("  {}  ", leaf.text),
        _ => leaf.text.clone(),
    };
    Span::styled(text, style)
}

/// Shows rendered output until the user quits. Always restores the terminal.
pub fn run(rendered: Rendered, config: Config, config_path: PathBuf) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App {
        rendered,
        config,
        config_path,
        scroll: 0,
        status: String::new(),
    };

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if !app.status.is_empty() {
        log::info!("{}", app.status);
    }
    res
}

fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Char('t') => app.toggle_theme(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.config.theme());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content = Paragraph::new(app.lines())
        .style(palette.base)
        .block(Block::default().borders(Borders::ALL).title("Reply"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("t: Toggle theme"),
        Span::styled(
            if app.status.is_empty() {
                String::new()
            } else {
                format!("  {}", app.status)
            },
            palette.label,
        ),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}
