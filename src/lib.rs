pub mod analysis;
pub mod cli;
pub mod error;
pub mod files;
pub mod i18n;
pub mod interface;
pub mod logging;
pub mod models;

pub use analysis::{compute_break_even, run, suggest_price};
pub use error::{CalcError, Result};
pub use i18n::{Language, Localized};
pub use models::{BatchResult, BreakEvenResult, PriceSuggestion, ProductInput};
