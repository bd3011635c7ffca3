use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::state::{AppState, Connectivity};

pub struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let status_color = match state.connectivity {
            Connectivity::Checking => Color::Yellow,
            Connectivity::Online(_) => Color::Green,
            Connectivity::Offline => Color::Red,
        };

        let line = Line::from(vec![
            Span::styled(
                "Mazzura",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                "AI-Powered Cultural Fashion OS",
                Style::default().fg(Color::Gray),
            ),
            Span::raw("   "),
            Span::styled(state.status_text(), Style::default().fg(status_color)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        f.render_widget(Paragraph::new(line).block(block), area);
    }
}

pub struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let help = if state.current_notification().is_some() {
            " Enter/Esc: dismiss  Ctrl-C: quit"
        } else {
            " Tab/↓: next  Shift-Tab/↑: prev  Enter: activate  ←/→: choose  PgUp/PgDn: scroll  Ctrl-U: clear  Ctrl-C: quit"
        };
        f.render_widget(
            Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray))),
            area,
        );
    }
}
