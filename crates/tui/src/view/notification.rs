use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Notification, NotificationKind};

const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 7;

/// Draw the oldest pending notification over the centre of the screen.
pub fn render(f: &mut Frame, note: &Notification) {
    let area = centered(f.area(), POPUP_WIDTH, POPUP_HEIGHT);

    let (title, color) = match note.kind {
        NotificationKind::Info => (" Notice ", Color::Cyan),
        NotificationKind::Error => (" Error ", Color::Red),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(note.text.clone()),
        Line::default(),
        Line::from(Span::styled(
            "Enter/Esc to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
