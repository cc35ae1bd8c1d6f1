//! `barkeep-app`
//!
//! Editing sessions over recipes and product sheets, plus the configuration
//! and reporting used by the `barkeep-report` binary.

pub mod config;
pub mod recipe_manager;
pub mod report;
pub mod sheet_manager;

pub use config::AppConfig;
pub use recipe_manager::{CocktailAutofill, RecipeForm, RecipeManager};
pub use sheet_manager::{ProductSheetAutofill, SheetForm, SheetManager};
