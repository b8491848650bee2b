//! UI rendering
//!
//! Draws the showing menu into the upper area and a one-line status bar
//! below it.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    demo::{Demo, Screen},
    surface::BufferSurface,
};

const STATUS_HEIGHT: u16 = 1;

/// Split `area` into the menu area and the status bar.
pub fn areas(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, demo: &mut Demo) {
    let (menu_area, status_area) = areas(frame.area());

    let mut surface = BufferSurface::new(frame.buffer_mut(), menu_area);
    demo.render(&mut surface);

    frame.render_widget(status(demo), status_area);
}

fn status(demo: &Demo) -> Paragraph<'static> {
    let screen = match demo.screen() {
        Screen::Main => Span::styled("main", Style::default().add_modifier(Modifier::BOLD)),
        Screen::Game => Span::styled("game", Style::default().add_modifier(Modifier::BOLD)),
    };

    let menu = demo.active();
    let mode = if menu.is_locked() {
        Span::styled(" | typing (enter to submit)", Style::default().fg(Color::Yellow))
    } else {
        Span::raw(" | arrows move, enter selects")
    };
    let name = demo.name().map_or_else(String::new, |name| format!(" | name: {name}"));

    let line = Line::from(vec![Span::raw(" "), screen, mode, Span::raw(name)]);
    Paragraph::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White))
}
