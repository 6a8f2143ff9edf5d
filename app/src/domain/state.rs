//! The aggregate state tree and the events that drive it.
//!
//! [`AppState`] is a pure function of the ordered events applied to it, so
//! [`AppState::replay`] over a store's event log rebuilds its snapshot.

use super::application::Application;
use super::project::Project;
use super::slice::{ProfileEvent, ProfileState, SliceEvent, SliceState};

/// Event addressed to one slice of the state tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Projects(SliceEvent<Project>),
    Applications(SliceEvent<Application>),
    User(ProfileEvent),
}

impl StoreEvent {
    /// Name of the slice the event targets, for logs.
    pub fn slice_name(&self) -> &'static str {
        match self {
            Self::Projects(_) => "projects",
            Self::Applications(_) => "applications",
            Self::User(_) => "user",
        }
    }
}

/// All slices composed into one read model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    projects: SliceState<Project>,
    applications: SliceState<Application>,
    user: ProfileState,
}

impl AppState {
    pub fn projects(&self) -> &SliceState<Project> {
        &self.projects
    }

    pub fn applications(&self) -> &SliceState<Application> {
        &self.applications
    }

    pub fn user(&self) -> &ProfileState {
        &self.user
    }

    /// Route `event` to its slice.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Projects(event) => self.projects.apply(event),
            StoreEvent::Applications(event) => self.applications.apply(event),
            StoreEvent::User(event) => self.user.apply(event),
        }
    }

    /// Rebuild state from an ordered event sequence, starting empty.
    pub fn replay<I>(events: I) -> Self
    where
        I: IntoIterator<Item = StoreEvent>,
    {
        events.into_iter().fold(Self::default(), |mut state, event| {
            state.apply(event);
            state
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::test_fixtures::{profile, project};
    use crate::domain::{RequestStatus, SliceOperation, UserId};

    #[test]
    fn events_only_touch_their_slice() {
        let mut state = AppState::default();
        state.apply(StoreEvent::Projects(SliceEvent::Started(
            SliceOperation::Fetch,
        )));

        assert!(state.projects().is_loading());
        assert_eq!(state.applications().status(), RequestStatus::Idle);
        assert_eq!(state.user().status(), RequestStatus::Idle);
    }

    #[test]
    fn replay_is_order_sensitive() {
        let first = project("First");
        let second = project("Second");
        let forward = vec![
            StoreEvent::Projects(SliceEvent::Created(first.clone())),
            StoreEvent::Projects(SliceEvent::Created(second.clone())),
        ];
        let backward: Vec<_> = forward.iter().rev().cloned().collect();

        let a = AppState::replay(forward);
        let b = AppState::replay(backward);

        assert_eq!(a.projects().items(), [first.clone(), second.clone()]);
        assert_eq!(b.projects().items(), [second, first]);
    }

    #[test]
    fn replay_covers_every_slice() {
        let loaded = profile(UserId::random());
        let state = AppState::replay([
            StoreEvent::User(ProfileEvent::Loaded(loaded.clone())),
            StoreEvent::Applications(SliceEvent::Fetched(Vec::new())),
        ]);

        assert_eq!(state.user().profile(), Some(&loaded));
        assert_eq!(state.applications().status(), RequestStatus::Fulfilled);
    }
}
