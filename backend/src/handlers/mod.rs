//! HTTP handlers

mod analysis;
mod fallback;
mod health;
mod history;
mod info;
mod params;
mod weather;

pub use analysis::*;
pub use fallback::*;
pub use health::*;
pub use history::*;
pub use info::*;
pub use params::QueryParams;
pub use weather::*;
