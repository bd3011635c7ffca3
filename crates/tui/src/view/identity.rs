use ratatui::{Frame, layout::Rect, style::Color, text::Line};

use super::{Component, button, field_line, form, muted, panel};
use crate::form::Field;
use crate::state::AppState;

pub struct IdentityComponent;

impl Component for IdentityComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let block = panel("Your Email", None);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines = vec![
            muted("Used to fetch your profile and wardrobe"),
            field_line(state, Field::SessionEmail),
            Line::default(),
            Line::from(button(state, Field::FetchProfileButton, "Fetch Profile", Color::Cyan)),
            Line::from(button(state, Field::LoadWardrobeButton, "Load Wardrobe", Color::Cyan)),
        ];
        let focus_row = match state.focus {
            Field::SessionEmail => Some(1),
            Field::FetchProfileButton => Some(3),
            Field::LoadWardrobeButton => Some(4),
            _ => None,
        };

        f.render_widget(form(lines, focus_row, inner.height), inner);
    }
}
