//! Core crate exports for building and running the `classfind` search surface.
//!
//! The root module re-exports the engine, routing and UI entry points so that
//! embedders can configure a session without digging through the module
//! hierarchy. The data model lives in `classfind-search-api`.

pub mod app_dirs;
pub mod context;
pub mod engine;
pub mod keyboard;
pub mod logging;
pub mod navigation;
pub mod recent;
mod systems;
pub mod ui;

pub use classfind_search_api::{
	AssignmentResult, ClassResult, DocumentResult, MemberResult, PostResult, SearchContext,
	SearchFilter, SearchMode, SearchResult, SearchResultType, SearchService, ServiceError,
};
pub use context::ContextOverride;
pub use engine::{SearchEngine, SearchState, SearchTuning};
pub use keyboard::{KeyBinding, KeyBindingError, KeyboardCoordinator};
pub use navigation::{MemberProfile, Navigation, SelectHandler, SelectionRouter};
pub use recent::{FileStore, RecentQueryStore};
pub use systems::search::{ChannelDispatch, SearchWorker};
pub use systems::service::{HttpSearchService, ServiceSettings};
pub use ui::{SearchOutcome, SearchUi, UiConfig};
