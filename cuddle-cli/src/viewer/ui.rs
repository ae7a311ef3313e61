//! UI rendering logic
//!
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Document (remaining space), painted lines with the cursor line highlighted
//! - Status line (1 line, fixed): cursor position and the hover text of the
//!   arm under the cursor

use super::app::App;
use crate::paint::PaintedLine;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 20;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;
/// Rows taken by everything except document text: title, status and borders
pub const CHROME_HEIGHT: u16 = 1 + 2 + STATUS_LINE_HEIGHT;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(STATUS_LINE_HEIGHT),
        ])
        .split(size);

    render_title_bar(frame, chunks[0], app);
    render_document(frame, chunks[1], app);
    render_status_line(frame, chunks[2], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let analysis = &app.document.analysis;
    let title = format!(
        "cuddle:: {} ({} blocks)",
        app.document.name(),
        analysis.spans.len()
    );
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_document(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Document");
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner_area.height as usize;
    let lines: Vec<Line> = app
        .lines
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(visible)
        .map(|(row, painted)| styled_line(painted, row == app.cursor))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner_area);
}

fn styled_line(painted: &PaintedLine, is_cursor: bool) -> Line<'static> {
    let base = if is_cursor {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let spans: Vec<Span> = painted
        .runs()
        .into_iter()
        .map(|(text, fg)| match fg {
            Some(rgb) => Span::styled(text, base.fg(Color::Rgb(rgb.r, rgb.g, rgb.b))),
            None => Span::styled(text, base),
        })
        .collect();
    Line::from(spans).style(base)
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let mut status = vec![
        Span::styled("Line: ", Style::default().fg(Color::Yellow)),
        Span::raw(format!("{}/{}", app.cursor + 1, app.lines.len())),
    ];

    if let Some(notice) = &app.notice {
        status.push(Span::raw(" | "));
        status.push(Span::styled(notice.clone(), Style::default().fg(Color::Green)));
    } else if let Some(hover) = app.hover_at_cursor() {
        status.push(Span::raw(" | "));
        status.push(Span::styled("Opened at ", Style::default().fg(Color::Yellow)));
        status.push(Span::raw(hover.to_string()));
    }

    let paragraph =
        Paragraph::new(Line::from(status)).style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(paragraph, area);
}
