//! Viewer state and key handling
//!
//! The App owns the analyzed document, its painted lines and the cursor. It
//! knows nothing about the terminal: the run loop feeds it keys and the
//! viewport height, and `ui` draws whatever it holds.

use crate::paint::{paint, PaintedLine};
use crate::session::{Document, Session};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cuddle::render::{AnnotationKind, Palette};
use log::debug;

pub struct App {
    session: Session,
    palette: Palette,
    pub document: Document,
    pub lines: Vec<PaintedLine>,
    /// Zero-based line under the cursor
    pub cursor: usize,
    /// How many lines are scrolled off the top of the viewport
    pub scroll: usize,
    /// Visible text rows, updated by the run loop on every frame
    pub viewport_height: usize,
    pub should_quit: bool,
    /// One-shot message shown in the status line, e.g. a failed reload
    pub notice: Option<String>,
}

impl App {
    pub fn new(session: Session, document: Document) -> Self {
        let palette = Palette::standard();
        let lines = paint(&document.text, &document.analysis, &palette, document.tab_size);
        App {
            session,
            palette,
            document,
            lines,
            cursor: 0,
            scroll: 0,
            viewport_height: 1,
            should_quit: false,
            notice: None,
        }
    }

    /// Handle a keyboard event. Returns whether anything changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.notice = None;
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(1),
            KeyCode::PageUp => self.move_cursor_up(self.viewport_height),
            KeyCode::PageDown => self.move_cursor_down(self.viewport_height),
            KeyCode::Home | KeyCode::Char('g') => self.move_cursor_up(self.cursor),
            KeyCode::End | KeyCode::Char('G') => self.move_cursor_down(self.lines.len()),
            KeyCode::Char('r') => self.reload(),
            _ => return false,
        }
        true
    }

    fn move_cursor_up(&mut self, by: usize) {
        self.cursor = self.cursor.saturating_sub(by);
        self.ensure_cursor_visible();
    }

    fn move_cursor_down(&mut self, by: usize) {
        let last = self.lines.len().saturating_sub(1);
        self.cursor = (self.cursor + by).min(last);
        self.ensure_cursor_visible();
    }

    /// Keep the cursor inside the viewport.
    pub fn ensure_cursor_visible(&mut self) {
        let height = self.viewport_height.max(1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
    }

    /// Re-read the document from disk and re-run the analysis.
    pub fn reload(&mut self) {
        match self.session.open(&self.document.path) {
            Ok(document) => {
                debug!("reloaded {}", document.path.display());
                self.lines = paint(
                    &document.text,
                    &document.analysis,
                    &self.palette,
                    document.tab_size,
                );
                self.document = document;
                self.cursor = self.cursor.min(self.lines.len().saturating_sub(1));
                self.ensure_cursor_visible();
                self.notice = Some("Reloaded".to_string());
            }
            Err(err) => self.notice = Some(format!("Reload failed: {err}")),
        }
    }

    /// Hover text of the arm on the cursor line, if it has one.
    pub fn hover_at_cursor(&self) -> Option<&str> {
        self.document
            .analysis
            .annotations
            .iter()
            .filter(|annotation| annotation.kind == AnnotationKind::Arm)
            .find(|annotation| annotation.line() == self.cursor)
            .and_then(|annotation| annotation.hover.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn app_for(contents: &str) -> (tempfile::NamedTempFile, App) {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        let session = Session::new(cuddle_config::load_defaults().unwrap(), false);
        let document = session.open(file.path()).unwrap();
        (file, App::new(session, document))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_app_creation() {
        let (_file, app) = app_for("if x:\n    a\nend");
        assert_eq!(app.cursor, 0);
        assert_eq!(app.lines.len(), 3);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let (_file, mut app) = app_for("if x:\n    a\nend");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, 0);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let text = (0..20).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let (_file, mut app) = app_for(&text);
        app.viewport_height = 5;
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.cursor, 5);
        assert_eq!(app.scroll, 1);
        press(&mut app, KeyCode::End);
        assert_eq!(app.cursor, 19);
        assert_eq!(app.scroll, 15);
        press(&mut app, KeyCode::Home);
        assert_eq!((app.cursor, app.scroll), (0, 0));
    }

    #[test]
    fn test_hover_follows_cursor() {
        let (_file, mut app) = app_for("if x:\n    a\nelse:\n    b\nend");
        assert_eq!(app.hover_at_cursor(), None);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.hover_at_cursor(), None);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.hover_at_cursor(), Some("Line 1: if x:"));
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let (file, mut app) = app_for("plain");
        assert!(app.document.analysis.spans.is_empty());

        std::fs::write(file.path(), "if x:\n    a\nend").unwrap();
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.document.analysis.spans.len(), 1);
        assert_eq!(app.notice.as_deref(), Some("Reloaded"));
    }

    #[test]
    fn test_quit_keys() {
        let (_file, mut app) = app_for("x");
        assert!(!press(&mut app, KeyCode::Char('x')));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
