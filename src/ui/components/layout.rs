use ratatui::layout::Rect;

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centres_and_clamps() {
		let area = Rect::new(0, 0, 80, 24);
		assert_eq!(centered_rect(area, 40, 10), Rect::new(20, 7, 40, 10));
		assert_eq!(centered_rect(area, 100, 30), area);
	}
}
