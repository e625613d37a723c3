use iced::widget::{button, container, scrollable, text, Column};
use iced::{Element, Length, Theme};
use uuid::Uuid;

use crate::state::catalog::CatalogEntry;
use crate::Message;

const PANEL_WIDTH: f32 = 280.0;

/// Build the product list panel.
///
/// One button per product, labelled with its display position, name, and
/// price. Clicking a row selects the product and loads it into the form;
/// the currently selected row is highlighted.
pub fn view(entries: &[CatalogEntry], selected: Option<Uuid>) -> Element<'_, Message> {
    if entries.is_empty() {
        return container(text("No products yet.").size(14))
            .width(PANEL_WIDTH)
            .padding(10)
            .into();
    }

    let mut rows = Column::new().spacing(4);

    for (position, entry) in entries.iter().enumerate() {
        let label = format!(
            "{}. {} - R${}",
            position + 1,
            entry.product.name,
            entry.product.price
        );

        let style: fn(&Theme, button::Status) -> button::Style = if selected == Some(entry.id) {
            button::primary
        } else {
            button::text
        };

        rows = rows.push(
            button(text(label).size(14))
                .on_press(Message::Select(entry.id))
                .style(style)
                .width(Length::Fill)
                .padding(6),
        );
    }

    scrollable(rows)
        .width(PANEL_WIDTH)
        .height(Length::Fill)
        .into()
}
