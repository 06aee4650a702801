/// Sequence numbers that decide which fetch may commit its response.
///
/// Each issued request supersedes the previous one; only the response whose
/// id matches the latest issued request is applied.
#[derive(Debug, Default)]
pub(crate) struct RequestLedger {
	next_id: u64,
	current_id: Option<u64>,
	in_flight: bool,
}

impl RequestLedger {
	pub(crate) fn issue(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		self.current_id = Some(self.next_id);
		self.in_flight = true;
		self.next_id
	}

	/// Revoke the right of any outstanding request to commit.
	pub(crate) fn invalidate(&mut self) {
		self.current_id = None;
		self.in_flight = false;
	}

	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		self.in_flight && Some(id) == self.current_id
	}

	pub(crate) fn complete(&mut self) {
		self.in_flight = false;
	}

	pub(crate) const fn is_in_flight(&self) -> bool {
		self.in_flight
	}
}
