//! Widgets composed by the search dialog.

mod chips;
mod input;
mod layout;
mod profile;
mod rows;

pub use chips::{InputContext, ProgressState, render_chips, render_input};
pub use input::QueryInput;
pub use layout::centered_rect;
pub use profile::render_profile;
pub use rows::{
	badge_label, build_recent_rows, build_result_rows, detail_label, detail_width, render_rows,
};
