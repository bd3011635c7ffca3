//! The single view.
//!
//! [`render`] is a pure function of [`AppState`]: it reads every slice and
//! writes none. Each panel is a [`Component`].
//!
//! Layout:
//! ```text
//! ┌ header: title · tagline · backend status ───────────────────┐
//! ├ Your Email ─┬ AI Challenges ─┬ Generate Outfit ─────────────┤
//! ├ Build Your Fashion DNA ──────┬ Smart Closet ────────────────┤
//! └ footer: key help ───────────────────────────────────────────┘
//! ```

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::{Field, FieldKind};
use crate::state::AppState;

mod challenges;
mod closet;
mod header;
mod identity;
mod notification;
mod outfit;
mod profile;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

const TOP_ROW_HEIGHT: u16 = 10;

/// Rows a panel keeps for its list when the form above it has to scroll.
const LIST_MIN_ROWS: u16 = 3;

/// Draw the whole screen.
pub fn render(f: &mut Frame, state: &AppState) {
    let [header_area, top, bottom, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(TOP_ROW_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    header::HeaderComponent.render(f, header_area, state);

    let [email, challenges, outfit] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(top);
    identity::IdentityComponent.render(f, email, state);
    challenges::ChallengesComponent.render(f, challenges, state);
    outfit::OutfitComponent.render(f, outfit, state);

    let [profile, closet] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(bottom);
    profile::ProfileComponent.render(f, profile, state);
    closet::ClosetComponent.render(f, closet, state);

    header::FooterComponent.render(f, footer_area, state);

    if let Some(note) = state.current_notification() {
        notification::render(f, note);
    }
}

// =============================================================================
// Shared widgets
// =============================================================================

/// A bordered panel with a bold title and an optional dim right-hand caption.
fn panel<'a>(title: &'a str, caption: Option<&'a str>) -> Block<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));

    match caption {
        Some(text) => block.title(
            Line::from(Span::styled(
                format!(" {text} "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        ),
        None => block,
    }
}

/// `Label: value` for a text field or selector.
///
/// Empty text shows the placeholder dimmed; the focused field gets a cursor.
fn field_line(state: &AppState, field: Field) -> Line<'static> {
    let focused = state.focus == field;
    let label_style = if focused {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = state.field_text(field);
    let mut spans = vec![Span::styled(format!("{}: ", field.label()), label_style)];

    if field.kind() == FieldKind::Select {
        spans.push(Span::styled(
            format!("‹ {value} ›"),
            if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White)
            },
        ));
    } else if value.is_empty() {
        spans.push(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(value, Style::default().fg(Color::White)));
    }

    if focused && field.kind() == FieldKind::Text {
        spans.push(Span::styled("▏", Style::default().fg(Color::Magenta)));
    }

    Line::from(spans)
}

/// `[ Label ]`, reversed when focused and dimmed when disabled.
fn button(state: &AppState, field: Field, label: &str, color: Color) -> Span<'static> {
    let style = if !state.is_enabled(field) {
        Style::default().fg(Color::DarkGray)
    } else if state.focus == field {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(format!("[ {label} ]"), style)
}

/// Split a panel interior into a form area and the list area below it.
///
/// The form gets every row it needs when there is room. Otherwise it
/// shrinks to leave `LIST_MIN_ROWS` for the list, but never below that
/// many rows itself.
fn split_form(inner: Rect, form_rows: usize) -> [Rect; 2] {
    let wanted = u16::try_from(form_rows).unwrap_or(u16::MAX);
    let room = inner
        .height
        .saturating_sub(LIST_MIN_ROWS)
        .max(inner.height.min(LIST_MIN_ROWS));
    Layout::vertical([Constraint::Length(wanted.min(room)), Constraint::Min(0)]).areas(inner)
}

/// Form lines scrolled just enough to keep `focus_row` inside `height`.
///
/// Lines are not wrapped so a row index is a screen row.
fn form(lines: Vec<Line<'static>>, focus_row: Option<usize>, height: u16) -> Paragraph<'static> {
    let visible = usize::from(height.max(1));
    let offset = focus_row.map_or(0, |row| (row + 1).saturating_sub(visible));
    Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
}

/// First list entry to draw, kept inside the list.
fn list_offset(offset: usize, len: usize) -> usize {
    offset.min(len.saturating_sub(1))
}

/// `↑ N more` above a list scrolled past its start.
fn above_marker(offset: usize) -> Option<Line<'static>> {
    (offset > 0).then(|| muted(&format!("↑ {offset} more (PgUp)")))
}

/// Lines describing a list that has nothing in it yet.
fn muted(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}
