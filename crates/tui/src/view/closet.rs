use mazzura_core::WardrobeItem;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{
    Component, above_marker, button, field_line, form, list_offset, muted, panel, split_form,
};
use crate::form::Field;
use crate::state::AppState;

const FORM_FIELDS: [Field; 10] = [
    Field::ItemOwner,
    Field::ItemName,
    Field::ItemCategory,
    Field::ItemColor,
    Field::ItemSize,
    Field::ItemBrand,
    Field::ItemPrice,
    Field::ItemTags,
    Field::ItemWarmth,
    Field::ItemImageUrl,
];

/// Fields, a blank row, then the button row.
const FORM_ROWS: usize = FORM_FIELDS.len() + 2;

pub struct ClosetComponent;

impl Component for ClosetComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let caption = format!("{} items", state.wardrobe.len());
        let block = panel("Smart Closet", Some(caption.as_str()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [form_area, cards_area] = split_form(inner, FORM_ROWS);

        let mut lines: Vec<Line> = FORM_FIELDS
            .iter()
            .map(|field| field_line(state, *field))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            button(state, Field::AddItemButton, "Add Item", Color::Magenta),
            Span::raw(" "),
            button(state, Field::ViewWardrobeButton, "View Wardrobe", Color::Cyan),
        ]));
        let focus_row = FORM_FIELDS
            .iter()
            .position(|field| *field == state.focus)
            .or_else(|| {
                matches!(
                    state.focus,
                    Field::AddItemButton | Field::ViewWardrobeButton
                )
                .then_some(FORM_ROWS - 1)
            });
        f.render_widget(form(lines, focus_row, form_area.height), form_area);

        let cards: Vec<Line> = if state.wardrobe.is_empty() {
            vec![muted("No items yet. Add your first piece.")]
        } else {
            let offset = list_offset(state.scroll.closet, state.wardrobe.len());
            above_marker(offset)
                .into_iter()
                .chain(state.wardrobe.iter().skip(offset).flat_map(card))
                .collect()
        };
        f.render_widget(Paragraph::new(cards).wrap(Wrap { trim: true }), cards_area);
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "—" } else { value }
}

/// Three lines per item: name, `brand · color · size`, then the image URL or
/// the category.
fn card(item: &WardrobeItem) -> [Line<'static>; 3] {
    let detail = format!(
        "{} · {} · {}",
        or_dash(&item.brand),
        or_dash(&item.color),
        or_dash(&item.size)
    );
    let visual = if item.image_url.is_empty() {
        item.category.as_str().to_string()
    } else {
        item.image_url.clone()
    };

    [
        Line::from(Span::styled(
            item.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("  {visual}"),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
