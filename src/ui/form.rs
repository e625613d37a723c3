use iced::widget::{button, column, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::data::{Product, Tag};
use crate::Message;

/// The active edit fields of the data-entry form.
///
/// This is UI state only; nothing here is persisted until the user presses
/// Add or Update.
#[derive(Debug, Default)]
pub struct FormState {
    pub name: String,
    pub price: String,
    pub description: String,
    pub tag: Tag,
    pub image: String,
}

impl FormState {
    /// Copy a product into the form fields (list selection)
    pub fn fill(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.price = product.price.clone();
        self.description = product.description.clone();
        self.tag = product.tag;
        self.image = product.image.clone();
    }

    /// Reset every field to its default
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the current fields as a product record
    pub fn to_product(&self) -> Product {
        Product {
            name: self.name.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
            tag: self.tag,
            image: self.image.clone(),
        }
    }
}

/// Build the data-entry form panel.
pub fn view(form: &FormState) -> Element<'_, Message> {
    let image_label: Element<Message> = if form.image.is_empty() {
        text("No image selected").size(13).into()
    } else {
        text(&form.image).size(13).into()
    };

    let actions = row![
        button("Add Product")
            .on_press(Message::Add)
            .style(button::primary)
            .padding(8),
        button("Update Product")
            .on_press(Message::Update)
            .style(button::secondary)
            .padding(8),
        button("Remove Product")
            .on_press(Message::Delete)
            .style(button::danger)
            .padding(8),
        button("Clear Fields")
            .on_press(Message::Clear)
            .style(button::text)
            .padding(8),
    ]
    .spacing(10);

    column![
        text("Product Name").size(14),
        text_input("e.g. Bunny", &form.name)
            .on_input(Message::NameChanged)
            .padding(8),
        text("Price").size(14),
        text_input("e.g. 25.00", &form.price)
            .on_input(Message::PriceChanged)
            .padding(8),
        text("Description").size(14),
        text_input("Optional", &form.description)
            .on_input(Message::DescriptionChanged)
            .padding(8),
        text("Tag").size(14),
        pick_list(Tag::ALL, Some(form.tag), Message::TagSelected)
            .padding(8)
            .width(Length::Fill),
        text("Product Image").size(14),
        row![
            button("Select Image")
                .on_press(Message::PickImage)
                .style(button::secondary)
                .padding(8),
            image_label,
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        actions,
    ]
    .spacing(8)
    .width(Length::Fill)
    .into()
}
