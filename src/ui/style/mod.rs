//! Visual styling for the search surface.
//!
//! Themes are plain `const` style tables; [`by_name`] resolves the names
//! accepted by the `ui.theme` setting.

mod theme;

pub use theme::{LIGHT, SLATE, Theme, by_name, names};
