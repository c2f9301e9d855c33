// src/ui/widgets/prompt.rs
//! Name input prompt widget, the dialog of the terminal world.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::Mode;

/// Render the one-line input prompt for the active mode.
pub fn render_prompt(f: &mut Frame<'_>, area: Rect, mode: &Mode, input: &str) {
    let title = match mode {
        Mode::CreateFile => "New file name".to_string(),
        Mode::CreateFolder => "New folder name".to_string(),
        Mode::Rename { target } => format!("Rename {target}"),
        Mode::Browse | Mode::ConfirmDelete { .. } => return,
    };

    let prompt = Paragraph::new(input.to_string())
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(prompt, area);
}
