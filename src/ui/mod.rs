/// View construction helpers
///
/// Widget trees for the two panels of the main window:
/// - The scrollable product list (list.rs)
/// - The data-entry form with its action buttons (form.rs)

pub mod form;
pub mod list;
