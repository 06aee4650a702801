//! Keyboard coordination for the search surface.
//!
//! Two listener scopes exist: the global toggle shortcut, always active, and
//! the open scope (arrows, Enter, Escape), which only exists while the surface
//! is open. Tab is deliberately left to the shell for filter-chip traversal.

use std::fmt;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

/// Errors raised while parsing a shortcut such as `ctrl+k`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyBindingError {
	#[error("shortcut '{0}' is missing a key")]
	MissingKey(String),
	#[error("unknown modifier '{modifier}' in shortcut '{shortcut}'")]
	UnknownModifier { shortcut: String, modifier: String },
	#[error("shortcut '{0}' must end in a single character")]
	InvalidKey(String),
}

/// Modifier plus letter combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
	pub modifiers: KeyModifiers,
	pub key: char,
}

impl KeyBinding {
	/// Modifier used by `mod+` shortcuts: Command on macOS, Control elsewhere.
	#[must_use]
	pub const fn platform_modifier() -> KeyModifiers {
		if cfg!(target_os = "macos") {
			KeyModifiers::SUPER
		} else {
			KeyModifiers::CONTROL
		}
	}

	/// `mod+k`, resolved for the current platform.
	#[must_use]
	pub const fn platform_default() -> Self {
		Self {
			modifiers: Self::platform_modifier(),
			key: 'k',
		}
	}

	/// Parse a shortcut like `ctrl+k`, `cmd+shift+p` or `mod+k`.
	pub fn parse(shortcut: &str) -> Result<Self, KeyBindingError> {
		let mut parts: Vec<&str> = shortcut.split('+').map(str::trim).collect();
		let key_part = parts
			.pop()
			.filter(|part| !part.is_empty())
			.ok_or_else(|| KeyBindingError::MissingKey(shortcut.to_string()))?;

		let mut chars = key_part.chars();
		let key = match (chars.next(), chars.next()) {
			(Some(key), None) => key.to_ascii_lowercase(),
			_ => return Err(KeyBindingError::InvalidKey(shortcut.to_string())),
		};

		let mut modifiers = KeyModifiers::NONE;
		for part in parts {
			let modifier = match part.to_ascii_lowercase().as_str() {
				"ctrl" | "control" => KeyModifiers::CONTROL,
				"alt" | "option" => KeyModifiers::ALT,
				"shift" => KeyModifiers::SHIFT,
				"cmd" | "command" | "super" | "meta" => KeyModifiers::SUPER,
				"mod" => Self::platform_modifier(),
				_ => {
					return Err(KeyBindingError::UnknownModifier {
						shortcut: shortcut.to_string(),
						modifier: part.to_string(),
					});
				}
			};
			modifiers |= modifier;
		}

		if modifiers.is_empty() {
			return Err(KeyBindingError::MissingKey(shortcut.to_string()));
		}

		Ok(Self { modifiers, key })
	}

	#[must_use]
	pub fn matches(&self, event: &KeyEvent) -> bool {
		let KeyCode::Char(pressed) = event.code else {
			return false;
		};
		let mut modifiers = event.modifiers;
		if !self.modifiers.contains(KeyModifiers::SHIFT) {
			modifiers.remove(KeyModifiers::SHIFT);
		}
		pressed.to_ascii_lowercase() == self.key && modifiers == self.modifiers
	}
}

impl fmt::Display for KeyBinding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (flag, label) in [
			(KeyModifiers::CONTROL, "Ctrl"),
			(KeyModifiers::SUPER, "Cmd"),
			(KeyModifiers::ALT, "Alt"),
			(KeyModifiers::SHIFT, "Shift"),
		] {
			if self.modifiers.contains(flag) {
				write!(f, "{label}+")?;
			}
		}
		write!(f, "{}", self.key.to_ascii_uppercase())
	}
}

/// What a key press asks the search surface to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
	Open,
	Close,
	SelectNext,
	SelectPrev,
	Confirm,
}

/// Listener that only exists while the surface is open.
#[derive(Debug)]
struct OpenScope;

impl OpenScope {
	fn handle(&self, event: &KeyEvent) -> Option<KeyIntent> {
		match event.code {
			KeyCode::Down => Some(KeyIntent::SelectNext),
			KeyCode::Up => Some(KeyIntent::SelectPrev),
			KeyCode::Enter => Some(KeyIntent::Confirm),
			KeyCode::Esc => Some(KeyIntent::Close),
			_ => None,
		}
	}
}

#[derive(Debug)]
pub struct KeyboardCoordinator {
	toggle: KeyBinding,
	open_scope: Option<OpenScope>,
}

impl KeyboardCoordinator {
	/// Create a coordinator for a closed surface with the given toggle shortcut.
	#[must_use]
	pub const fn new(toggle: KeyBinding) -> Self {
		Self {
			toggle,
			open_scope: None,
		}
	}

	#[must_use]
	pub const fn toggle(&self) -> KeyBinding {
		self.toggle
	}

	#[must_use]
	pub const fn is_open(&self) -> bool {
		self.open_scope.is_some()
	}

	/// Attach or detach the open-scope listener.
	pub fn set_open(&mut self, open: bool) {
		if open == self.is_open() {
			return;
		}
		self.open_scope = open.then_some(OpenScope);
		tracing::trace!(open, "search surface listener scope changed");
	}

	/// Translate a key press. Returns `None` for keys neither scope handles,
	/// leaving them to the shell (text input, Tab, and so on).
	pub fn handle(&mut self, event: &KeyEvent) -> Option<KeyIntent> {
		if self.toggle.matches(event) {
			let open = !self.is_open();
			self.set_open(open);
			return Some(if open { KeyIntent::Open } else { KeyIntent::Close });
		}

		let intent = self.open_scope.as_ref()?.handle(event)?;
		if intent == KeyIntent::Close {
			self.set_open(false);
		}
		Some(intent)
	}
}

impl Default for KeyboardCoordinator {
	fn default() -> Self {
		Self::new(KeyBinding::platform_default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	fn ctrl_k() -> KeyBinding {
		KeyBinding::parse("ctrl+k").expect("parse binding")
	}

	#[test]
	fn toggle_flips_open_state() {
		let mut keyboard = KeyboardCoordinator::new(ctrl_k());
		let shortcut = press(KeyCode::Char('k'), KeyModifiers::CONTROL);
		assert_eq!(keyboard.handle(&shortcut), Some(KeyIntent::Open));
		assert!(keyboard.is_open());
		assert_eq!(keyboard.handle(&shortcut), Some(KeyIntent::Close));
		assert!(!keyboard.is_open());
	}

	#[test]
	fn navigation_keys_are_ignored_while_closed() {
		let mut keyboard = KeyboardCoordinator::new(ctrl_k());
		for code in [KeyCode::Down, KeyCode::Up, KeyCode::Enter, KeyCode::Esc] {
			assert_eq!(keyboard.handle(&press(code, KeyModifiers::NONE)), None);
		}
	}

	#[test]
	fn open_scope_maps_arrows_enter_and_escape() {
		let mut keyboard = KeyboardCoordinator::new(ctrl_k());
		keyboard.set_open(true);
		assert_eq!(
			keyboard.handle(&press(KeyCode::Down, KeyModifiers::NONE)),
			Some(KeyIntent::SelectNext)
		);
		assert_eq!(
			keyboard.handle(&press(KeyCode::Up, KeyModifiers::NONE)),
			Some(KeyIntent::SelectPrev)
		);
		assert_eq!(
			keyboard.handle(&press(KeyCode::Enter, KeyModifiers::NONE)),
			Some(KeyIntent::Confirm)
		);
		assert_eq!(keyboard.handle(&press(KeyCode::Tab, KeyModifiers::NONE)), None);
		assert_eq!(
			keyboard.handle(&press(KeyCode::Esc, KeyModifiers::NONE)),
			Some(KeyIntent::Close)
		);
		assert!(!keyboard.is_open());
	}

	#[test]
	fn plain_letters_are_left_to_the_input() {
		let mut keyboard = KeyboardCoordinator::new(ctrl_k());
		keyboard.set_open(true);
		assert_eq!(
			keyboard.handle(&press(KeyCode::Char('k'), KeyModifiers::NONE)),
			None
		);
	}

	#[test]
	fn parse_accepts_aliases_and_rejects_garbage() {
		let binding = KeyBinding::parse("Cmd+Shift+P").expect("parse");
		assert_eq!(binding.key, 'p');
		assert_eq!(binding.modifiers, KeyModifiers::SUPER | KeyModifiers::SHIFT);
		assert_eq!(
			KeyBinding::parse("mod+k").expect("parse"),
			KeyBinding::platform_default()
		);
		assert!(matches!(
			KeyBinding::parse("hyper+k"),
			Err(KeyBindingError::UnknownModifier { .. })
		));
		assert!(KeyBinding::parse("ctrl+").is_err());
		assert!(KeyBinding::parse("k").is_err());
		assert!(KeyBinding::parse("ctrl+enter").is_err());
	}

	#[test]
	fn display_lists_modifiers_then_key() {
		assert_eq!(ctrl_k().to_string(), "Ctrl+K");
	}
}
