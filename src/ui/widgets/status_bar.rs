// src/ui/widgets/status_bar.rs
//! Status/notification bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::Mode;

const HELP: &str = "enter: open  n: new file  m: new folder  r: rename  d: delete  q: quit";

/// Render the bottom bar: the pending delete confirmation, the last
/// operation notification, or the key help line.
pub fn render_status_bar(f: &mut Frame<'_>, area: Rect, mode: &Mode, status: Option<&str>) {
    let text = match mode {
        Mode::ConfirmDelete { target } => format!("Delete {target}? (y/n)"),
        _ => status.unwrap_or(HELP).to_string(),
    };

    let bar = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}
