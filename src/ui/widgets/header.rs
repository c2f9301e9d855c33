// src/ui/widgets/header.rs
//! Current-directory header widget.

use std::path::Path;

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders},
};

use crate::fs::tail_path;

/// Render the header strip with the tail of the current path.
pub fn render_header(f: &mut Frame<'_>, area: Rect, dir: &Path) {
    let header = Block::default()
        .title(format!(" {}", tail_path(dir, 3)))
        .borders(Borders::ALL);

    f.render_widget(header, area);
}
