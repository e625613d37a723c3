use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use super::data::Product;

/// Errors surfaced by catalog operations.
///
/// All of these are handled at the triggering UI action; none propagate
/// further. A missing catalog file on load is not an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required form field was left empty
    #[error("The {0} field is required.")]
    MissingField(&'static str),

    /// Update or delete was requested with no product selected
    #[error("Select a product first.")]
    NothingSelected,

    #[error("Failed to access the catalog file: {0}")]
    Io(#[from] io::Error),

    #[error("The catalog file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One in-memory catalog record.
///
/// The id is assigned at load or insertion time and never written to disk,
/// so the stored format stays a plain array of products. Selection state
/// tracks ids rather than positions, which keeps it valid across deletions.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: Uuid,
    pub product: Product,
}

impl CatalogEntry {
    fn new(product: Product) -> Self {
        CatalogEntry {
            id: Uuid::new_v4(),
            product,
        }
    }
}

/// The Catalog manages the product collection and its backing JSON file.
///
/// The whole collection is loaded at startup and rewritten in full after
/// every mutation. Reads and writes are synchronous on the caller's thread;
/// the file is not safe for concurrent external modification.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    path: PathBuf,
}

impl Catalog {
    /// Open the catalog at its per-user data path.
    ///
    /// The file lives in the user's data directory:
    /// - Linux: ~/.local/share/craft-catalog/products.json
    /// - macOS: ~/Library/Application Support/craft-catalog/products.json
    /// - Windows: %APPDATA%\craft-catalog\products.json
    pub fn open_default() -> Result<Self, CatalogError> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::open(path)
    }

    /// Open the catalog backed by the given file.
    ///
    /// An absent file yields an empty catalog; unreadable or malformed
    /// JSON is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();

        let products: Vec<Product> = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        let entries = products.into_iter().map(CatalogEntry::new).collect();

        Ok(Catalog { entries, path })
    }

    /// Where the catalog file is stored by default
    fn default_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        path.push("craft-catalog");
        path.push("products.json");
        path
    }

    /// Rewrite the backing file with the full collection, pretty-printed.
    ///
    /// Not atomic: a write failure can leave a truncated file behind.
    fn save(&self) -> Result<(), CatalogError> {
        let products: Vec<&Product> = self.entries.iter().map(|entry| &entry.product).collect();
        let json = serde_json::to_string_pretty(&products)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Validate and append a product, then persist.
    ///
    /// Returns the new entry's id. On a validation failure neither the
    /// collection nor the file changes.
    pub fn add(&mut self, product: Product) -> Result<Uuid, CatalogError> {
        product.validate()?;

        let entry = CatalogEntry::new(product);
        let id = entry.id;
        self.entries.push(entry);
        self.save()?;

        Ok(id)
    }

    /// Replace the selected product in place, then persist.
    pub fn update(&mut self, selection: Option<Uuid>, product: Product) -> Result<(), CatalogError> {
        let index = self.index_of(selection)?;
        self.entries[index].product = product;
        self.save()
    }

    /// Remove the selected product, then persist.
    ///
    /// Later entries shift down by one. Returns the removed product.
    pub fn remove(&mut self, selection: Option<Uuid>) -> Result<Product, CatalogError> {
        let index = self.index_of(selection)?;
        let entry = self.entries.remove(index);
        self.save()?;
        Ok(entry.product)
    }

    /// Resolve a selection id to its current position.
    ///
    /// A `None` selection and a stale id (already deleted) both count as
    /// nothing selected.
    fn index_of(&self, selection: Option<Uuid>) -> Result<usize, CatalogError> {
        selection
            .and_then(|id| self.entries.iter().position(|entry| entry.id == id))
            .ok_or(CatalogError::NothingSelected)
    }

    pub fn get(&self, id: Uuid) -> Option<&Product> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.product)
    }

    /// All entries in display order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("path", &self.path)
            .field("products", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Tag;
    use tempfile::tempdir;

    fn product(name: &str) -> Product {
        Product {
            name: name.to_string(),
            price: "25.00".to_string(),
            description: String::new(),
            tag: Tag::None,
            image: "photos/bunny.png".to_string(),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::open(dir.path().join("products.json")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_persists_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");

        let mut catalog = Catalog::open(&path).unwrap();
        catalog.add(product("Bunny")).unwrap();

        let reloaded = Catalog::open(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0].product, product("Bunny"));
    }

    #[test]
    fn test_add_with_missing_field_changes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");

        let mut catalog = Catalog::open(&path).unwrap();
        let mut incomplete = product("Bunny");
        incomplete.image.clear();

        let result = catalog.add(incomplete);
        assert!(matches!(result, Err(CatalogError::MissingField("image"))));
        assert!(catalog.is_empty());
        // Nothing was persisted either
        assert!(!path.exists());
    }

    #[test]
    fn test_update_without_selection_fails() {
        let dir = tempdir().unwrap();
        let mut catalog = Catalog::open(dir.path().join("products.json")).unwrap();
        catalog.add(product("Bunny")).unwrap();

        let result = catalog.update(None, product("Fox"));
        assert!(matches!(result, Err(CatalogError::NothingSelected)));
        assert_eq!(catalog.entries()[0].product.name, "Bunny");
    }

    #[test]
    fn test_update_replaces_selected_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");

        let mut catalog = Catalog::open(&path).unwrap();
        catalog.add(product("Bunny")).unwrap();
        let id = catalog.add(product("Fox")).unwrap();

        let mut revised = product("Fox");
        revised.price = "30.00".to_string();
        revised.tag = Tag::Promotion;
        catalog.update(Some(id), revised.clone()).unwrap();

        let reloaded = Catalog::open(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.entries()[1].product, revised);
        assert_eq!(reloaded.entries()[0].product.name, "Bunny");
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let dir = tempdir().unwrap();
        let mut catalog = Catalog::open(dir.path().join("products.json")).unwrap();

        catalog.add(product("Bunny")).unwrap();
        let id = catalog.add(product("Fox")).unwrap();
        catalog.add(product("Owl")).unwrap();

        let removed = catalog.remove(Some(id)).unwrap();
        assert_eq!(removed.name, "Fox");
        assert_eq!(catalog.len(), 2);

        let names: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|entry| entry.product.name.as_str())
            .collect();
        assert_eq!(names, ["Bunny", "Owl"]);
    }

    #[test]
    fn test_remove_without_selection_fails() {
        let dir = tempdir().unwrap();
        let mut catalog = Catalog::open(dir.path().join("products.json")).unwrap();
        catalog.add(product("Bunny")).unwrap();

        assert!(matches!(
            catalog.remove(None),
            Err(CatalogError::NothingSelected)
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_stale_selection_counts_as_nothing_selected() {
        let dir = tempdir().unwrap();
        let mut catalog = Catalog::open(dir.path().join("products.json")).unwrap();

        let id = catalog.add(product("Bunny")).unwrap();
        catalog.remove(Some(id)).unwrap();

        let result = catalog.update(Some(id), product("Fox"));
        assert!(matches!(result, Err(CatalogError::NothingSelected)));
    }

    #[test]
    fn test_save_load_round_trip_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");

        let mut catalog = Catalog::open(&path).unwrap();
        let mut bunny = product("Bunny");
        bunny.description = "Crochet bunny, 20cm".to_string();
        bunny.tag = Tag::New;
        catalog.add(bunny).unwrap();
        catalog.add(product("Fox")).unwrap();
        catalog.add(product("Owl")).unwrap();

        let first = fs::read_to_string(&path).unwrap();

        // Reload and rewrite without mutating; the file must not change
        let reloaded = Catalog::open(&path).unwrap();
        reloaded.save().unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);

        let names: Vec<&str> = reloaded
            .entries()
            .iter()
            .map(|entry| entry.product.name.as_str())
            .collect();
        assert_eq!(names, ["Bunny", "Fox", "Owl"]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Catalog::open(&path),
            Err(CatalogError::Parse(_))
        ));
    }
}
