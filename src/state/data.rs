/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the storage layer and the UI layer.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::catalog::CatalogError;

/// Fixed-choice label categorizing a product.
///
/// Stored in the catalog file as its display string (e.g. "Limited Edition"),
/// so the JSON stays readable by hand.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    None,
    New,
    Promotion,
    #[serde(rename = "Limited Edition")]
    LimitedEdition,
}

impl Tag {
    /// All tags, in the order the pick-list shows them
    pub const ALL: [Tag; 4] = [Tag::None, Tag::New, Tag::Promotion, Tag::LimitedEdition];

    pub fn label(self) -> &'static str {
        match self {
            Tag::None => "None",
            Tag::New => "New",
            Tag::Promotion => "Promotion",
            Tag::LimitedEdition => "Limited Edition",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry as it is persisted.
///
/// `price` is kept as text on purpose: it is display data ("25.00"), never
/// arithmetic input. `description` and `tag` default when absent so files
/// written by hand still load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tag: Tag,
    pub image: String,
}

impl Product {
    /// Check the presence invariant: name, price, and image must be non-empty.
    ///
    /// Reports the first missing field in form order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.is_empty() {
            return Err(CatalogError::MissingField("name"));
        }
        if self.price.is_empty() {
            return Err(CatalogError::MissingField("price"));
        }
        if self.image.is_empty() {
            return Err(CatalogError::MissingField("image"));
        }
        Ok(())
    }
}

/// Derive the stored image reference from an absolute path picked by the user.
///
/// The reference is `<parent-folder-name>/<filename-with-extension>`, e.g.
/// `/home/ana/photos/bunny.png` becomes `photos/bunny.png`. The file itself
/// is not copied or moved. A file sitting in the filesystem root has no
/// parent folder name, so the reference degrades to the filename alone.
pub fn image_reference(path: &Path) -> String {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match path.parent().and_then(Path::file_name) {
        Some(folder) => format!("{}/{}", folder.to_string_lossy(), filename),
        None => filename,
    }
}
