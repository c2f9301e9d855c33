// src/ui/layout.rs
//! Layout computation for the UI panes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Mode;

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Header strip showing the current directory
    pub header: Rect,
    /// Entry list area
    pub list: Rect,
    /// Prompt input line (only while a name prompt is active)
    pub prompt: Option<Rect>,
    /// Bottom status/notification bar
    pub status: Rect,
}

/// Compute the layout based on total area and the current input mode.
/// The prompt line only takes space while a name is being collected;
/// delete confirmation happens in the status bar.
pub fn compute_layout(area: Rect, mode: &Mode) -> ComputedLayout {
    let wants_prompt = matches!(
        mode,
        Mode::CreateFile | Mode::CreateFolder | Mode::Rename { .. }
    );

    if wants_prompt {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        ComputedLayout {
            header: chunks[0],
            list: chunks[1],
            prompt: Some(chunks[2]),
            status: chunks[3],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        ComputedLayout {
            header: chunks[0],
            list: chunks[1],
            prompt: None,
            status: chunks[2],
        }
    }
}
