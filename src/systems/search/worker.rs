use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use classfind_search_api::{ClassQuery, ResourceQuery, SearchService};

use super::commands::SearchCommand;
use crate::engine::{
	DispatchError, FetchPayload, FetchRequest, FetchResponse, FetchTarget, QueryDispatch,
};

/// Handle to the background thread that talks to the search service.
pub struct SearchWorker {
	tx: Sender<SearchCommand>,
	rx: Receiver<FetchResponse>,
	latest_query_id: Arc<AtomicU64>,
	handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
	/// Launch the worker thread for `service`.
	pub fn spawn(service: Arc<dyn SearchService>) -> Self {
		let (command_tx, command_rx) = mpsc::channel();
		let (result_tx, result_rx) = mpsc::channel();
		let latest_query_id = Arc::new(AtomicU64::new(0));
		let thread_latest = Arc::clone(&latest_query_id);

		let handle = thread::Builder::new()
			.name("classfind-search".into())
			.spawn(move || worker_loop(service.as_ref(), &command_rx, &result_tx, &thread_latest))
			.map_err(|err| tracing::error!(%err, "failed to spawn search worker"))
			.ok();

		Self {
			tx: command_tx,
			rx: result_rx,
			latest_query_id,
			handle,
		}
	}

	/// Dispatcher that feeds this worker, for use by a search engine.
	#[must_use]
	pub fn dispatcher(&self) -> ChannelDispatch {
		ChannelDispatch {
			tx: self.tx.clone(),
			latest_query_id: Arc::clone(&self.latest_query_id),
		}
	}

	pub fn try_recv(&self) -> Result<FetchResponse, TryRecvError> {
		self.rx.try_recv()
	}

	/// Stop the worker and wait for it to finish its current request.
	pub fn shutdown(&mut self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
		if let Some(handle) = self.handle.take() {
			if handle.join().is_err() {
				tracing::error!("search worker panicked");
			}
		}
	}
}

impl Drop for SearchWorker {
	fn drop(&mut self) {
		self.shutdown();
	}
}

/// [`QueryDispatch`] that forwards requests to a [`SearchWorker`].
#[derive(Clone)]
pub struct ChannelDispatch {
	tx: Sender<SearchCommand>,
	latest_query_id: Arc<AtomicU64>,
}

impl QueryDispatch for ChannelDispatch {
	fn dispatch(&mut self, request: FetchRequest) -> Result<(), DispatchError> {
		self.latest_query_id.store(request.id, Ordering::Release);
		self.tx.send(SearchCommand::Query(request)).map_err(|_| {
			tracing::warn!("search worker is gone; dropping request");
			DispatchError
		})
	}
}

fn worker_loop(
	service: &dyn SearchService,
	command_rx: &Receiver<SearchCommand>,
	result_tx: &Sender<FetchResponse>,
	latest_query_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			SearchCommand::Query(request) => {
				// A newer request was dispatched while this one waited in the queue.
				if request.id < latest_query_id.load(Ordering::Acquire) {
					tracing::debug!(id = request.id, "skipping superseded search");
					continue;
				}
				let response = run_request(service, &request);
				if result_tx.send(response).is_err() {
					break;
				}
			}
			SearchCommand::Shutdown => break,
		}
	}
}

fn run_request(service: &dyn SearchService, request: &FetchRequest) -> FetchResponse {
	let outcome = match request.target {
		FetchTarget::Classes => service
			.search_classes(&ClassQuery {
				query: request.query.clone(),
			})
			.map(FetchPayload::Classes),
		FetchTarget::ClassResources { class_id, kind } => service
			.search_class_resources(&ResourceQuery {
				class_id,
				query: request.query.clone(),
				kind: Some(kind),
			})
			.map(FetchPayload::ClassResources),
	};
	match outcome {
		Ok(payload) => FetchResponse::success(request, payload),
		Err(err) => FetchResponse::failure(request, err.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::Duration;

	use classfind_search_api::{
		ClassRecord, ClassResourcePage, ClassSearchPage, SearchResultType, ServiceError,
	};

	use super::*;

	#[derive(Default)]
	struct StubService {
		queries: Mutex<Vec<String>>,
	}

	impl SearchService for StubService {
		fn search_classes(&self, query: &ClassQuery) -> Result<ClassSearchPage, ServiceError> {
			if let Ok(mut queries) = self.queries.lock() {
				queries.push(query.query.clone());
			}
			Ok(ClassSearchPage {
				items: vec![ClassRecord {
					id: 1,
					name: Some(query.query.clone()),
					..ClassRecord::default()
				}],
				total: 1,
				page: 1,
				page_size: 20,
			})
		}

		fn search_class_resources(
			&self,
			query: &ResourceQuery,
		) -> Result<ClassResourcePage, ServiceError> {
			if let Ok(mut queries) = self.queries.lock() {
				queries.push(query.query.clone());
			}
			Err(ServiceError::Status {
				status: 503,
				body: "maintenance".into(),
			})
		}
	}

	fn request(id: u64, query: &str, target: FetchTarget) -> FetchRequest {
		FetchRequest {
			id,
			query: query.into(),
			target,
		}
	}

	#[test]
	fn responses_are_forwarded_with_request_identity() {
		let mut worker = SearchWorker::spawn(Arc::new(StubService::default()));
		let mut dispatch = worker.dispatcher();
		dispatch
			.dispatch(request(1, "algebra", FetchTarget::Classes))
			.expect("dispatch");

		let response = worker
			.rx
			.recv_timeout(Duration::from_secs(1))
			.expect("receive search response");
		assert_eq!(response.id, 1);
		assert_eq!(response.query, "algebra");
		assert!(matches!(response.outcome, Ok(FetchPayload::Classes(_))));
		worker.shutdown();
	}

	#[test]
	fn service_errors_become_messages() {
		let mut worker = SearchWorker::spawn(Arc::new(StubService::default()));
		let mut dispatch = worker.dispatcher();
		dispatch
			.dispatch(request(
				1,
				"lab",
				FetchTarget::ClassResources {
					class_id: 45,
					kind: SearchResultType::Post,
				},
			))
			.expect("dispatch");

		let response = worker
			.rx
			.recv_timeout(Duration::from_secs(1))
			.expect("receive search response");
		let message = response.outcome.expect_err("service failure");
		assert!(message.contains("503"));
		worker.shutdown();
	}

	#[test]
	fn queued_requests_superseded_before_running_are_skipped() {
		let service = StubService::default();
		let (command_tx, command_rx) = mpsc::channel();
		let (result_tx, result_rx) = mpsc::channel();
		let latest = AtomicU64::new(3);

		for (id, query) in [(1, "ch"), (2, "che"), (3, "chem")] {
			command_tx
				.send(SearchCommand::Query(request(id, query, FetchTarget::Classes)))
				.expect("queue request");
		}
		command_tx.send(SearchCommand::Shutdown).expect("queue shutdown");

		worker_loop(&service, &command_rx, &result_tx, &latest);

		let responses: Vec<FetchResponse> = result_rx.try_iter().collect();
		assert_eq!(responses.len(), 1);
		assert_eq!(responses[0].id, 3);
		assert_eq!(
			*service.queries.lock().expect("queries"),
			vec!["chem".to_string()]
		);
	}
}
