use anyhow::Result;
use classfind::{Navigation, SearchOutcome};

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match (&outcome.navigation, &outcome.selection) {
		(Some(Navigation::Navigate(route)), _) => println!("{route}"),
		(Some(Navigation::Anchor(anchor)), _) => println!("#{anchor}"),
		(_, Some(selection)) => println!("{} {}", selection.kind(), selection.id()),
		(_, None) => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use classfind::{ClassResult, SearchResult};
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_selection_and_navigation() {
		let outcome = SearchOutcome::confirmed(
			"bio",
			SearchResult::Class(ClassResult {
				id: 45,
				title: "Biology".into(),
				subtitle: None,
				teacher_name: None,
				member_count: 24,
			}),
			Some(Navigation::Navigate("/class/45".into())),
		);

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["type"], "class");
		assert_eq!(value["selection"]["memberCount"], 24);
		assert_eq!(value["navigation"]["kind"], "navigate");
		assert_eq!(value["navigation"]["target"], "/class/45");
	}

	#[test]
	fn cancelled_outcome_has_null_selection() {
		let json = format_outcome_json(&SearchOutcome::cancelled("ch")).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
