// ABOUTME: Shared data models for recipes fed into the shopping-list pipeline
// ABOUTME: Re-exports Recipe and RecipeSummary

/// Recipe input and summary types
pub mod recipe;

pub use recipe::{Recipe, RecipeSummary};
