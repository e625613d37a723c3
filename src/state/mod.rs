/// State management module
///
/// This module handles all application state, including:
/// - The catalog store and its JSON persistence (catalog.rs)
/// - Shared data structures (data.rs)

pub mod catalog;
pub mod data;
