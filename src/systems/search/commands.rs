use crate::engine::FetchRequest;

/// Commands understood by the background fetch worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Run a fetch against the search service.
	Query(FetchRequest),
	/// Stop the background worker thread.
	Shutdown,
}
