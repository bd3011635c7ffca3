use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Component, above_marker, button, field_line, form, list_offset, panel, split_form};
use crate::form::Field;
use crate::state::AppState;

const FORM_ROWS: [Field; 4] = [Field::Mood, Field::Weather, Field::Event, Field::GenerateButton];

pub struct OutfitComponent;

impl Component for OutfitComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let block = panel("Generate Outfit", None);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [form_area, list_area] = split_form(inner, FORM_ROWS.len());

        let lines = vec![
            field_line(state, Field::Mood),
            field_line(state, Field::Weather),
            field_line(state, Field::Event),
            Line::from(button(state, Field::GenerateButton, "Generate", Color::Magenta)),
        ];
        let focus_row = FORM_ROWS.iter().position(|field| *field == state.focus);
        f.render_widget(form(lines, focus_row, form_area.height), form_area);

        let Some(outfit) = &state.generated else {
            return;
        };
        let offset = list_offset(state.scroll.outfit, outfit.items.len());
        let mut lines = vec![Line::from(Span::styled(
            outfit.title.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(above_marker(offset));
        lines.extend(
            outfit
                .items
                .iter()
                .skip(offset)
                .map(|piece| Line::from(format!("• {}", piece.summary()))),
        );

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), list_area);
    }
}
