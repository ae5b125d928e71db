//! Domain models for the AgriSat mock backend

mod field;
mod history;
mod ndvi;
mod weather;

pub use field::*;
pub use history::*;
pub use ndvi::*;
pub use weather::*;
