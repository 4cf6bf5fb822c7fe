// Module exports for models

pub mod grid;
pub mod occurrence;
pub mod settings;
