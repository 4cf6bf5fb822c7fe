// Calendar Grid Library
// Time-grid layout for calendar week views

pub mod error;
pub mod layout;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{LayoutError, LayoutResult};
