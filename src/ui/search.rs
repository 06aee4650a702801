use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use super::App;
use crate::engine::DispatchError;

impl App<'_> {
	/// Apply every response the worker has finished since the last frame.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.worker.try_recv() {
				Ok(response) => {
					self.engine.apply_response(response);
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					if !self.worker_lost {
						tracing::error!("search worker disconnected");
						self.worker_lost = true;
					}
					self.engine.fail_in_flight(DispatchError.to_string());
					break;
				}
			}
		}
	}

	/// Commit the debounced query once its quiet period has passed.
	pub(crate) fn tick_search(&mut self, now: Instant) {
		if self.engine.tick(now) {
			self.table_state.select(Some(0));
		}
	}

	/// How long the event loop may sleep before the next frame. A pending
	/// debounce deadline shortens the pause so the query commits on time.
	pub(crate) fn frame_pause(&self, now: Instant, frame: Duration) -> Duration {
		self.engine
			.next_deadline()
			.map_or(frame, |deadline| deadline.saturating_duration_since(now).min(frame))
	}
}
