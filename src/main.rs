use iced::widget::{column, container, row, text};
use iced::{Element, Length, Task, Theme};
use rfd::{FileDialog, MessageDialog, MessageLevel};
use uuid::Uuid;

mod state;
mod ui;

use state::catalog::{Catalog, CatalogError};
use state::data::{image_reference, Tag};
use ui::form::FormState;

/// Main application state
struct CraftCatalog {
    /// The product catalog and its backing file
    catalog: Catalog,
    /// The active edit fields
    form: FormState,
    /// Id of the product currently selected in the list, if any
    selected: Option<Uuid>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    PriceChanged(String),
    DescriptionChanged(String),
    TagSelected(Tag),
    /// User clicked "Select Image"
    PickImage,
    /// User clicked a product in the list
    Select(Uuid),
    Add,
    Update,
    Delete,
    Clear,
}

impl CraftCatalog {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because the app cannot function without
        // its catalog file
        let catalog = Catalog::open_default()
            .expect("Failed to open the product catalog. Check permissions and disk space.");

        println!(
            "🧶 Craft catalog loaded: {} products from {}",
            catalog.len(),
            catalog.path().display()
        );

        let status = format!("Ready. {} products in catalog.", catalog.len());

        (
            CraftCatalog {
                catalog,
                form: FormState::default(),
                selected: None,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(name) => self.form.name = name,
            Message::PriceChanged(price) => self.form.price = price,
            Message::DescriptionChanged(description) => self.form.description = description,
            Message::TagSelected(tag) => self.form.tag = tag,

            Message::Select(id) => {
                if let Some(product) = self.catalog.get(id) {
                    self.form.fill(product);
                    self.selected = Some(id);
                }
            }

            Message::PickImage => {
                // Native file picker; only the derived reference is stored,
                // the file itself stays where it is
                let picked = FileDialog::new()
                    .set_title("Select the product image")
                    .add_filter("Image files", &["jpg", "jpeg", "png", "gif", "webp"])
                    .pick_file();

                if let Some(path) = picked {
                    self.form.image = image_reference(&path);
                }
            }

            Message::Add => {
                let name = self.form.name.clone();
                match self.catalog.add(self.form.to_product()) {
                    Ok(_) => {
                        self.status = format!("Product '{}' added.", name);
                        self.reset_form();
                    }
                    Err(err) => show_error(&err),
                }
            }

            Message::Update => {
                let name = self.form.name.clone();
                match self.catalog.update(self.selected, self.form.to_product()) {
                    Ok(()) => {
                        self.status = format!("Product '{}' updated.", name);
                        self.reset_form();
                    }
                    Err(err) => show_error(&err),
                }
            }

            Message::Delete => match self.catalog.remove(self.selected) {
                Ok(removed) => {
                    self.status = format!("Product '{}' removed.", removed.name);
                    self.reset_form();
                }
                Err(err) => show_error(&err),
            },

            Message::Clear => self.reset_form(),
        }

        Task::none()
    }

    /// Clear the form fields and drop the list selection
    fn reset_form(&mut self) {
        self.form.clear();
        self.selected = None;
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let panels = row![
            ui::list::view(self.catalog.entries(), self.selected),
            ui::form::view(&self.form),
        ]
        .spacing(20)
        .height(Length::Fill);

        let page = column![panels, text(&self.status).size(14)]
            .spacing(10)
            .padding(15);

        container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Surface a catalog error as a blocking dialog
fn show_error(err: &CatalogError) {
    let title = match err {
        CatalogError::MissingField(_) => "Validation error",
        CatalogError::NothingSelected => "Selection error",
        CatalogError::Io(_) | CatalogError::Parse(_) => "Storage error",
    };

    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(err.to_string())
        .show();
}

fn main() -> iced::Result {
    iced::application(
        "Craft Catalog - Amigurumis",
        CraftCatalog::update,
        CraftCatalog::view,
    )
    .theme(CraftCatalog::theme)
    .centered()
    .run_with(CraftCatalog::new)
}
