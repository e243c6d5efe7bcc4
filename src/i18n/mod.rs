pub mod messages;

pub use messages::{Language, Localized, Message};
