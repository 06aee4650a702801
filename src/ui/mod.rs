//! Interactive terminal shell for the search surface.
//!
//! [`SearchUi`] configures and launches a session. The remaining submodules
//! implement the event loop, key handling, rendering, and the widgets and
//! styles the dialog is drawn with.

mod actions;
mod builder;
pub mod components;
mod config;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;

#[cfg(test)]
mod tests;

pub use builder::SearchUi;
pub use config::UiConfig;
pub use outcome::SearchOutcome;
pub use state::App;
