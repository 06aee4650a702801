use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use classfind_search_api::{
	ClassQuery, ClassRecord, ClassResourcePage, ClassSearchPage, MemberRecord, PostRecord,
	ResourceQuery, SearchFilter, SearchResultType, SearchService, ServiceError,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, SearchUi, UiConfig};
use crate::keyboard::KeyBinding;
use crate::navigation::Navigation;
use crate::recent::{MemoryStore, RECENT_SEARCHES_KEY, RecentQueryStore};

struct StubService;

impl SearchService for StubService {
	fn search_classes(&self, query: &ClassQuery) -> Result<ClassSearchPage, ServiceError> {
		if query.query == "boom" {
			return Err(ServiceError::Transport("connection refused".into()));
		}
		Ok(ClassSearchPage {
			items: vec![ClassRecord {
				id: 45,
				name: Some("Biology".into()),
				teacher_name: Some("Ms Okafor".into()),
				member_count: Some(24),
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
		Ok(ClassResourcePage {
			posts: vec![PostRecord {
				id: 7,
				class_id: Some(query.class_id),
				title: Some("Lab safety".into()),
				..PostRecord::default()
			}],
			members: vec![MemberRecord {
				id: 3,
				full_name: Some("Ada Lovelace".into()),
				email: Some("ada@school.test".into()),
				role: Some("Teacher".into()),
				..MemberRecord::default()
			}],
			total: 2,
			..ClassResourcePage::default()
		})
	}
}

/// Service whose worker thread dies on the first request.
struct PanickingService;

impl SearchService for PanickingService {
	fn search_classes(&self, _query: &ClassQuery) -> Result<ClassSearchPage, ServiceError> {
		panic!("service crashed");
	}

	fn search_class_resources(
		&self,
		_query: &ResourceQuery,
	) -> Result<ClassResourcePage, ServiceError> {
		panic!("service crashed");
	}
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn ui_config(start_open: bool) -> UiConfig {
	UiConfig {
		toggle: KeyBinding::parse("ctrl+k").expect("parse toggle"),
		start_open,
		..UiConfig::default()
	}
}

fn session(location: &str, start_open: bool) -> SearchUi {
	SearchUi::new(Arc::new(StubService))
		.with_location(location)
		.with_ui_config(ui_config(start_open))
}

fn type_text(app: &mut App<'_>, text: &str) {
	let now = Instant::now();
	for c in text.chars() {
		assert!(app.handle_key_at(key(KeyCode::Char(c)), now).is_none());
	}
}

/// Commit the pending query and wait for the worker to answer it.
fn settle(app: &mut App<'_>) {
	app.engine.flush();
	let deadline = Instant::now() + Duration::from_secs(2);
	while app.engine.state().is_loading && Instant::now() < deadline {
		app.pump_search_results();
		thread::sleep(Duration::from_millis(5));
	}
	assert!(!app.engine.state().is_loading, "search never settled");
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(90, 26)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal.backend().to_string()
}

#[test]
fn host_screen_shows_context_and_toggle_hint() {
	let mut app = session("/class/45/documents", false).build();
	assert!(!app.is_open());
	let view = render(&mut app);
	assert!(view.contains("/class/45/documents"));
	assert!(view.contains("Class 45 (class mode)"));
	assert!(view.contains("Press Ctrl+K to search"));
}

#[test]
fn toggle_opens_dialog_with_dashboard_chips() {
	let mut app = session("/", false).build();
	assert!(app.handle_key_at(ctrl('k'), Instant::now()).is_none());
	assert!(app.is_open());
	let view = render(&mut app);
	assert!(view.contains("All classes"));
	assert!(view.contains("Classes"));
	assert!(view.contains("Type at least 2 characters"));
}

#[test]
fn typed_query_renders_result_rows() {
	let mut app = session("/", true).build();
	type_text(&mut app, "bio");
	settle(&mut app);
	let view = render(&mut app);
	assert!(view.contains("CLASS"));
	assert!(view.contains("Biology"));
	assert!(view.contains("24 members"));
}

#[test]
fn confirming_a_class_navigates_and_records_the_query() {
	let mut app = session("/", true).build();
	type_text(&mut app, "bio");
	settle(&mut app);

	let outcome = app
		.handle_key_at(key(KeyCode::Enter), Instant::now())
		.expect("session ends");
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "bio");
	assert_eq!(outcome.navigation, Some(Navigation::Navigate("/class/45".into())));
	assert_eq!(app.engine.state().recent_searches, vec!["bio".to_string()]);
	assert!(!app.is_open());
}

#[test]
fn confirming_a_member_opens_the_profile_overlay() {
	let mut app = session("/class/45", true).build();
	for _ in 0..3 {
		app.handle_key_at(key(KeyCode::Tab), Instant::now());
	}
	assert_eq!(
		app.engine.state().active_filter,
		SearchFilter::Only(SearchResultType::Member)
	);
	type_text(&mut app, "ada");
	settle(&mut app);

	assert!(app.handle_key_at(key(KeyCode::Enter), Instant::now()).is_none());
	let profile = app.profile().expect("profile overlay");
	assert_eq!(profile.email.as_deref(), Some("ada@school.test"));
	let view = render(&mut app);
	assert!(view.contains("ada@school.test"));

	assert!(app.handle_key_at(key(KeyCode::Esc), Instant::now()).is_none());
	assert!(app.profile().is_none());
	assert!(app.is_open());
}

#[test]
fn back_tab_wraps_to_the_last_chip() {
	let mut app = session("/class/45", true).build();
	app.handle_key_at(key(KeyCode::BackTab), Instant::now());
	assert_eq!(
		app.engine.state().active_filter,
		SearchFilter::Only(SearchResultType::Member)
	);
}

#[test]
fn escape_closes_without_clearing_the_query() {
	let mut app = session("/", true).build();
	type_text(&mut app, "bio");
	settle(&mut app);

	assert!(app.handle_key_at(key(KeyCode::Esc), Instant::now()).is_none());
	assert!(!app.is_open());
	assert!(app.handle_key_at(ctrl('k'), Instant::now()).is_none());
	assert!(app.is_open());
	assert_eq!(app.search_input.text(), "bio");
	assert_eq!(app.engine.state().results.len(), 1);
}

#[test]
fn recent_searches_can_be_reused_and_removed() {
	let store = MemoryStore::new().with_entry(RECENT_SEARCHES_KEY, r#"["chem","algebra"]"#);
	let mut app = session("/", true)
		.with_recent_store(RecentQueryStore::open(Box::new(store), 5))
		.build();
	let view = render(&mut app);
	assert!(view.contains("Recent searches"));
	assert!(view.contains("algebra"));

	app.handle_key_at(ctrl('d'), Instant::now());
	assert_eq!(app.engine.state().recent_searches, vec!["algebra".to_string()]);

	assert!(app.handle_key_at(key(KeyCode::Enter), Instant::now()).is_none());
	assert_eq!(app.search_input.text(), "algebra");
	assert_eq!(app.engine.state().debounced_query, "algebra");
	settle(&mut app);
	assert_eq!(app.engine.state().results.len(), 1);
}

#[test]
fn service_failure_renders_generic_error() {
	let mut app = session("/", true).build();
	type_text(&mut app, "boom");
	settle(&mut app);
	assert!(app.engine.state().error.is_some());
	let view = render(&mut app);
	assert!(view.contains("Something went wrong"));
	assert!(!view.contains("connection refused"));
}

#[test]
fn lost_worker_degrades_to_error_state() {
	let mut app = SearchUi::new(Arc::new(PanickingService))
		.with_ui_config(ui_config(true))
		.build();
	type_text(&mut app, "bio");
	settle(&mut app);
	assert!(app.engine.state().error.is_some());
	assert!(app.engine.state().results.is_empty());

	// Later queries settle as failures instead of waiting on a dead channel.
	type_text(&mut app, "x");
	settle(&mut app);
	assert_eq!(app.engine.state().debounced_query, "biox");
	assert!(app.engine.state().error.is_some());

	let view = render(&mut app);
	assert!(view.contains("Something went wrong"));
	assert!(!view.contains("Searching"));
}

#[test]
fn event_loop_wakes_for_pending_debounce_deadline() {
	let mut app = session("/", true).build();
	let frame = Duration::from_secs(1);
	let now = Instant::now();
	assert_eq!(app.frame_pause(now, frame), frame);

	for c in "bio".chars() {
		assert!(app.handle_key_at(key(KeyCode::Char(c)), now).is_none());
	}
	assert_eq!(app.frame_pause(now, frame), Duration::from_millis(300));
	assert_eq!(
		app.frame_pause(now + Duration::from_millis(250), frame),
		Duration::from_millis(50)
	);
	assert_eq!(app.frame_pause(now + frame, frame), Duration::ZERO);
}

#[test]
fn quitting_from_the_host_screen_cancels() {
	let mut app = session("/", false).build();
	let outcome = app
		.handle_key_at(key(KeyCode::Char('q')), Instant::now())
		.expect("session ends");
	assert!(!outcome.accepted);
	assert!(outcome.selection.is_none());
}

#[test]
fn initial_query_is_committed_at_build() {
	let mut app = session("/", true).with_initial_query("bio").build();
	assert_eq!(app.engine.state().debounced_query, "bio");
	settle(&mut app);
	assert_eq!(app.engine.state().results.len(), 1);
}
