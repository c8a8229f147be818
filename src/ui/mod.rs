pub mod ci;
pub mod diff;
pub mod error;
pub mod json;
pub mod terminal;
