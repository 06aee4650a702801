use std::time::{Duration, Instant};

/// Trailing debounce driven by caller-supplied timestamps.
///
/// Every [`Debouncer::schedule`] replaces the pending value and pushes the
/// deadline out, so only the last value of a burst is ever released.
#[derive(Debug)]
pub(crate) struct Debouncer {
	delay: Duration,
	pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
	value: String,
	due: Instant,
}

impl Debouncer {
	pub(crate) const fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	pub(crate) fn schedule(&mut self, value: String, now: Instant) {
		self.pending = Some(Pending {
			value,
			due: now + self.delay,
		});
	}

	pub(crate) fn cancel(&mut self) {
		self.pending = None;
	}

	/// Release the pending value once its deadline has passed.
	pub(crate) fn poll(&mut self, now: Instant) -> Option<String> {
		let due = self.pending.as_ref()?.due;
		if now < due {
			return None;
		}
		self.pending.take().map(|pending| pending.value)
	}

	pub(crate) fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.due)
	}

	pub(crate) const fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}
