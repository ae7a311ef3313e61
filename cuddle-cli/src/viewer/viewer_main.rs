//! Terminal setup and the viewer's event loop.
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io;
use std::path::Path;
use std::time::Duration;

use super::app::App;
use super::ui;
use crate::error::CliError;
use crate::session::Session;

/// Run the viewer for the given file path
pub fn run_viewer(session: Session, path: &Path) -> Result<(), CliError> {
    let document = session.open(path)?;
    let mut app = App::new(session, document);

    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result.map_err(CliError::from)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        let height = terminal.size()?.height.saturating_sub(ui::CHROME_HEIGHT);
        app.viewport_height = usize::from(height).max(1);
        app.ensure_cursor_visible();

        terminal.draw(|frame| ui::render(frame, app))?;

        // Resize needs no handling: the next draw picks up the new size
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
                if app.should_quit {
                    return Ok(());
                }
            }
        }
    }
}
