// src/ui/widgets/file_list.rs
//! Entry list widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::fs::Entry;

/// Render the entry list. Labels carry the "[File]" marker for files, so
/// directories and files stay distinguishable as uniform text.
pub fn render_file_list(f: &mut Frame<'_>, area: Rect, entries: &[Entry], state: &mut ListState) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(entry.label()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
