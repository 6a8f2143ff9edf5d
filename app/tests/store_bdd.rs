//! Behavioural tests for the store and slice lifecycle.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Duration as ChronoDuration;
use mockable::{Clock, DefaultClock};
use projectmate::domain::{
    AppState, Creator, Marketplace, Project, ProjectDraft, RequestStatus, StoreError,
    StoreNotification,
};
use projectmate::outbound::catalogue::CatalogueSource;
use projectmate::outbound::session_store::InMemorySessionStore;
use projectmate::outbound::simulated_api::{Latency, SimulatedApi, demo_user_id};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

type App = Marketplace<SimulatedApi, InMemorySessionStore>;

#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Clone)]
struct Notifications(Arc<Mutex<broadcast::Receiver<StoreNotification>>>);

#[derive(Default, ScenarioState)]
struct StoreWorld {
    runtime: Slot<RuntimeHandle>,
    app: Slot<Arc<App>>,
    notifications: Slot<Notifications>,
    last_create: Slot<Result<Project, StoreError>>,
}

impl StoreWorld {
    fn app(&self) -> Arc<App> {
        self.app.get().expect("marketplace should be set up")
    }

    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        let runtime = self.runtime.get().expect("runtime should be set up");
        runtime.0.block_on(future)
    }

    fn create(&self, draft: ProjectDraft) {
        let app = self.app();
        let result = self.block_on(app.projects().create(
            draft,
            creator(),
            CancellationToken::new(),
        ));
        self.last_create.set(result);
    }
}

fn creator() -> Creator {
    Creator {
        id: demo_user_id(),
        name: "John Doe".to_owned(),
        avatar: "/placeholder-avatar.png".to_owned(),
        title: "Founder".to_owned(),
    }
}

fn draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_owned(),
        description: "A short summary".to_owned(),
        detailed_description: "A longer description".to_owned(),
        category: "Web Development".to_owned(),
        is_paid: true,
        budget: 1_500,
        deadline: DefaultClock.utc() + ChronoDuration::days(30),
        required_skills: vec!["React".to_owned()],
        team_size: 2,
        location: "Remote".to_owned(),
        duration: "1 month".to_owned(),
        responsibilities: Vec::new(),
        requirements: Vec::new(),
    }
}

#[fixture]
fn world() -> StoreWorld {
    StoreWorld::default()
}

#[given("a marketplace with an instant backend")]
fn a_marketplace_with_an_instant_backend(world: &StoreWorld) {
    let runtime = Runtime::new().expect("create runtime");
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let transport = SimulatedApi::new(
        CatalogueSource::load(None, 0, 0).expect("bundled catalogue"),
        Latency::Fixed(Duration::ZERO),
        Arc::clone(&clock),
    );
    let app = Marketplace::new(
        Arc::new(transport),
        Arc::new(InMemorySessionStore::new()),
        clock,
    );
    let receiver = app.store().subscribe();

    world.runtime.set(RuntimeHandle(Arc::new(runtime)));
    world.app.set(Arc::new(app));
    world
        .notifications
        .set(Notifications(Arc::new(Mutex::new(receiver))));
}

#[when("a project titled {title} is created")]
fn a_project_titled_is_created(world: &StoreWorld, title: String) {
    world.create(draft(&title));
}

#[when("a project without required skills is created")]
fn a_project_without_required_skills_is_created(world: &StoreWorld) {
    let mut incomplete = draft("Skill-less");
    incomplete.required_skills.clear();
    world.create(incomplete);
}

#[when("projects are fetched")]
fn projects_are_fetched(world: &StoreWorld) {
    let app = world.app();
    world
        .block_on(app.projects().fetch_all(CancellationToken::new()))
        .expect("fetch succeeds");
}

#[when("a projects fetch is cancelled")]
fn a_projects_fetch_is_cancelled(world: &StoreWorld) {
    let app = world.app();
    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = world.block_on(app.projects().fetch_all(cancel));
    assert_eq!(result, Err(StoreError::Cancelled));
}

#[then("the projects slice holds {count:usize} listing titled {title}")]
fn the_projects_slice_holds_listing_titled(world: &StoreWorld, count: usize, title: String) {
    let created = world
        .last_create
        .get()
        .expect("a creation was attempted")
        .expect("creation succeeded");
    let state = world.app().projects().state();
    assert_eq!(state.items().len(), count);
    assert_eq!(state.user_items().len(), count);
    assert_eq!(state.items().first(), Some(&created));
    assert_eq!(created.title, title);
    assert!(!created.id.as_uuid().is_nil());
}

#[then("the projects slice lists {count:usize} projects")]
fn the_projects_slice_lists_projects(world: &StoreWorld, count: usize) {
    assert_eq!(world.app().projects().state().items().len(), count);
}

#[then("the projects slice is fulfilled")]
fn the_projects_slice_is_fulfilled(world: &StoreWorld) {
    let state = world.app().projects().state();
    assert_eq!(state.status(), RequestStatus::Fulfilled);
    assert_eq!(state.error(), None);
}

#[then("the creation fails validation")]
fn the_creation_fails_validation(world: &StoreWorld) {
    match world.last_create.get().expect("a creation was attempted") {
        Err(StoreError::Validation(_)) => {}
        other => panic!("Expected a validation failure, got: {other:?}"),
    }
}

#[then("no store events were recorded")]
fn no_store_events_were_recorded(world: &StoreWorld) {
    let app = world.app();
    assert!(app.store().events().is_empty());
    assert_eq!(app.snapshot(), AppState::default());
}

#[then("replaying the event log reproduces the snapshot")]
fn replaying_the_event_log_reproduces_the_snapshot(world: &StoreWorld) {
    let app = world.app();
    assert_eq!(AppState::replay(app.store().events()), app.snapshot());
}

#[then("every event produced exactly one notification")]
fn every_event_produced_exactly_one_notification(world: &StoreWorld) {
    let app = world.app();
    let notifications = world.notifications.get().expect("subscribed");
    let mut receiver = notifications.0.lock().expect("receiver lock");
    let mut sequences = Vec::new();
    while let Ok(notification) = receiver.try_recv() {
        sequences.push(notification.sequence);
    }
    let expected: Vec<u64> = (1..=app.store().sequence()).collect();
    assert_eq!(sequences, expected);
}

#[then("the projects slice is idle and empty")]
fn the_projects_slice_is_idle_and_empty(world: &StoreWorld) {
    let state = world.app().projects().state();
    assert_eq!(state.status(), RequestStatus::Idle);
    assert!(state.items().is_empty());
    assert_eq!(state.error(), None);
}

#[scenario(
    path = "tests/features/store.feature",
    name = "Creating a project on an empty marketplace"
)]
fn creating_a_project_on_an_empty_marketplace(world: StoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/store.feature",
    name = "Fetching projects loads the catalogue"
)]
fn fetching_projects_loads_the_catalogue(world: StoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/store.feature",
    name = "An invalid draft is rejected without touching state"
)]
fn an_invalid_draft_is_rejected_without_touching_state(world: StoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/store.feature",
    name = "Replaying the event log reproduces the snapshot"
)]
fn replaying_the_event_log_reproduces_the_snapshot_scenario(world: StoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/store.feature",
    name = "A cancelled fetch leaves the slice idle"
)]
fn a_cancelled_fetch_leaves_the_slice_idle(world: StoreWorld) {
    let _ = world;
}
