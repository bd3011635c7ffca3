use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{
    Component, above_marker, button, field_line, form, list_offset, muted, panel, split_form,
};
use crate::form::Field;
use crate::state::AppState;

const FORM_FIELDS: [Field; 7] = [
    Field::ProfileName,
    Field::ProfileEmail,
    Field::BodyType,
    Field::SkinTone,
    Field::PreferredColors,
    Field::Vibe,
    Field::Location,
];

/// Fields, a blank row, then the button row.
const FORM_ROWS: usize = FORM_FIELDS.len() + 2;

pub struct ProfileComponent;

impl Component for ProfileComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let block = panel("Build Your Fashion DNA", None);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [form_area, fetched_area] = split_form(inner, FORM_ROWS);

        let save_label = if state.loading.profile {
            "Saving..."
        } else {
            "Save Profile"
        };

        let mut lines: Vec<Line> = FORM_FIELDS
            .iter()
            .map(|field| field_line(state, *field))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            button(state, Field::SaveProfileButton, save_label, Color::Magenta),
            Span::raw(" "),
            button(state, Field::FetchByEmailButton, "Fetch by Email", Color::Cyan),
        ]));
        let focus_row = FORM_FIELDS
            .iter()
            .position(|field| *field == state.focus)
            .or_else(|| {
                matches!(
                    state.focus,
                    Field::SaveProfileButton | Field::FetchByEmailButton
                )
                .then_some(FORM_ROWS - 1)
            });
        f.render_widget(form(lines, focus_row, form_area.height), form_area);

        let json = state.fetched_profile_lines();
        let fetched: Vec<Line> = if json.is_empty() {
            vec![muted("No profile fetched yet.")]
        } else {
            let offset = list_offset(state.scroll.profile, json.len());
            above_marker(offset)
                .into_iter()
                .chain(
                    json.into_iter()
                        .skip(offset)
                        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray)))),
                )
                .collect()
        };
        f.render_widget(
            Paragraph::new(fetched).wrap(Wrap { trim: false }),
            fetched_area,
        );
    }
}
