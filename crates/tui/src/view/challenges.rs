use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Component, above_marker, list_offset, muted, panel};
use crate::state::AppState;

pub struct ChallengesComponent;

impl Component for ChallengesComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let lines: Vec<Line> = if state.challenges.is_empty() {
            vec![muted("Loading challenges...")]
        } else {
            let offset = list_offset(state.scroll.challenges, state.challenges.len());
            above_marker(offset)
                .into_iter()
                .chain(state.challenges.iter().skip(offset).flat_map(|challenge| {
                    [
                        Line::from(vec![
                            Span::styled(
                                challenge.title.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(" "),
                            Span::styled(
                                format!("+{}", challenge.reward_points),
                                Style::default().fg(Color::Green),
                            ),
                        ]),
                        Line::from(Span::styled(
                            challenge.prompt.clone(),
                            Style::default().fg(Color::Gray),
                        )),
                    ]
                }))
                .collect()
        };

        f.render_widget(
            Paragraph::new(lines)
                .block(panel("AI Challenges", None))
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
