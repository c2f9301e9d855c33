//! Application state management.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, widgets::ListState};
use tracing::warn;

use crate::{
    error::BrowserError,
    fs::{Entry, load_entries, navigate, open_target, ops},
    ui::{
        keybindings::{BrowseAction, key_to_action},
        layout::compute_layout,
        widgets::{render_file_list, render_header, render_prompt, render_status_bar},
    },
    viewer,
};

/// What the next key press means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Normal list navigation.
    Browse,
    /// Collecting a name for a new file.
    CreateFile,
    /// Collecting a name for a new folder.
    CreateFolder,
    /// Collecting the new name for `target`.
    Rename { target: String },
    /// Waiting for y/n before deleting `target`.
    ConfirmDelete { target: String },
}

/// Main application state.
pub struct App {
    /// Current directory being browsed
    pub current_dir: PathBuf,
    /// Directory entries, re-read in full after every mutation
    pub entries: Vec<Entry>,
    /// List widget state
    pub state: ListState,
    /// Currently selected index
    pub selected: usize,
    /// Input mode (browse, prompt, confirm)
    pub mode: Mode,
    /// Prompt input buffer
    pub input: String,
    /// Last operation notification shown in the status bar
    pub status: Option<String>,
}

impl App {
    /// Create an application positioned at `start_dir`.
    pub fn new(start_dir: PathBuf) -> Self {
        let entries = load_entries(&start_dir);
        let mut state = ListState::default();
        state.select(Some(0));

        Self {
            current_dir: start_dir,
            entries,
            state,
            selected: 0,
            mode: Mode::Browse,
            input: String::new(),
            status: None,
        }
    }

    fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    /// Re-read the current directory and clamp the selection.
    pub fn refresh(&mut self) {
        self.entries = load_entries(&self.current_dir);
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
        self.state.select(Some(self.selected));
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match self.mode.clone() {
            Mode::Browse => return self.on_browse_key(key),
            Mode::ConfirmDelete { target } => self.on_confirm_key(key, &target),
            _ => self.on_prompt_key(key),
        }
        false
    }

    fn on_browse_key(&mut self, key: KeyEvent) -> bool {
        match key_to_action(&key) {
            BrowseAction::Down => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            BrowseAction::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            BrowseAction::Enter => self.enter_selected(),
            BrowseAction::Back => self.go_up(),
            BrowseAction::NewFile => self.begin_prompt(Mode::CreateFile),
            BrowseAction::NewFolder => self.begin_prompt(Mode::CreateFolder),
            BrowseAction::Rename => {
                if let Some(entry) = self.selected_entry() {
                    let target = entry.name.clone();
                    self.begin_prompt(Mode::Rename { target });
                }
            }
            BrowseAction::Delete => {
                if let Some(entry) = self.selected_entry() {
                    let target = entry.name.clone();
                    self.mode = Mode::ConfirmDelete { target };
                }
            }
            BrowseAction::Quit => return true,
            BrowseAction::None => {}
        }

        self.state.select(Some(self.selected));
        false
    }

    /// Open the selected entry: descend into directories, hand supported
    /// files to the external viewer, silently ignore everything else.
    pub fn enter_selected(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };

        if entry.is_dir {
            self.current_dir = navigate(&self.current_dir, &entry.name);
            self.selected = 0;
            self.refresh();
        } else if let Some((path, mime)) = open_target(&self.current_dir, &entry.name) {
            viewer::open_in_viewer(&path, mime);
        }
    }

    /// Go up to the parent directory.
    pub fn go_up(&mut self) {
        if self.current_dir.pop() {
            self.selected = 0;
            self.refresh();
        }
    }

    fn begin_prompt(&mut self, mode: Mode) {
        self.mode = mode;
        self.input.clear();
        self.status = None;
    }

    fn on_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                self.input.clear();
            }
            KeyCode::Enter => self.submit_prompt(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn on_confirm_key(&mut self, key: KeyEvent, target: &str) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let outcome = ops::delete(&self.current_dir, target);
                self.note_outcome(outcome, format!("Deleted {target}"), "Cannot delete");
                self.mode = Mode::Browse;
                self.refresh();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    /// Run the operation the active prompt was collecting a name for.
    pub fn submit_prompt(&mut self) {
        let name = self.input.trim().to_string();
        if name.is_empty() {
            self.mode = Mode::Browse;
            self.input.clear();
            return;
        }

        match self.mode.clone() {
            Mode::CreateFile => {
                let outcome = ops::create_file(&self.current_dir, &name);
                self.note_outcome(outcome, format!("Created {name}"), "Cannot create file");
            }
            Mode::CreateFolder => {
                let outcome = ops::create_folder(&self.current_dir, &name);
                self.note_outcome(outcome, format!("Created {name}"), "Cannot create folder");
            }
            Mode::Rename { target } => {
                let outcome = ops::rename(&self.current_dir, &target, &name);
                self.note_outcome(outcome, format!("Renamed {target} to {name}"), "Cannot rename");
            }
            Mode::Browse | Mode::ConfirmDelete { .. } => {}
        }

        self.mode = Mode::Browse;
        self.input.clear();
        self.refresh();
    }

    /// Turn an operation result into the status-bar notification. Only the
    /// coarse outcome reaches the user; the error kind goes to the log.
    fn note_outcome(&mut self, outcome: Result<(), BrowserError>, ok: String, failed: &str) {
        match outcome {
            Ok(()) => self.status = Some(ok),
            Err(e) => {
                warn!(error = %e, "operation failed");
                self.status = Some(match e {
                    BrowserError::AlreadyExists { .. } => "Already exists".to_string(),
                    _ => failed.to_string(),
                });
            }
        }
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area(), &self.mode);

        render_header(f, layout.header, &self.current_dir);
        render_file_list(f, layout.list, &self.entries, &mut self.state);
        if let Some(prompt_area) = layout.prompt {
            render_prompt(f, prompt_area, &self.mode, &self.input);
        }
        render_status_bar(f, layout.status, &self.mode, self.status.as_deref());
    }
}
