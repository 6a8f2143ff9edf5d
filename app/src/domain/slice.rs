//! Slice state containers and their pure transition functions.
//!
//! Every asynchronous slice operation follows the same lifecycle:
//! `Started` moves the slice to [`RequestStatus::Pending`] and exactly one
//! terminal event follows. Terminal events always clear `Pending`, even when
//! another request on the same slice is still in flight; results are applied
//! in settlement order.
//!
//! ## Invariants
//! - `Pending` implies `error == None`.
//! - `Rejected` implies `error.is_some()` and the slice is not loading.
//! - `Failed` and `Cancelled` never touch the collections.

use serde::{Deserialize, Serialize};

use super::application::{Application, ApplicationId};
use super::project::{Project, ProjectId};
use super::user::UserProfile;

/// Lifecycle of the most recent request on a slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// Asynchronous operation a slice event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceOperation {
    Fetch,
    Create,
    Update,
}

/// Records with a stable identity, so updates can find every copy.
pub trait Identified {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
}

impl Identified for Project {
    type Id = ProjectId;

    fn id(&self) -> &ProjectId {
        &self.id
    }
}

impl Identified for Application {
    type Id = ApplicationId;

    fn id(&self) -> &ApplicationId {
        &self.id
    }
}

/// Outcome events for a collection slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceEvent<T> {
    /// A request was issued.
    Started(SliceOperation),
    /// The full collection arrived and replaces `items`.
    Fetched(Vec<T>),
    /// A new record was created; appended to `items` and `user_items` at once.
    Created(T),
    /// A record was replaced wherever it appears.
    Updated(T),
    /// A request was rejected.
    Failed {
        operation: SliceOperation,
        message: String,
    },
    /// A request was cancelled before settling.
    Cancelled(SliceOperation),
    /// Local selection of the record currently being viewed.
    CurrentSelected(Option<T>),
}

/// State of a collection slice (projects, applications).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceState<T> {
    items: Vec<T>,
    user_items: Vec<T>,
    current: Option<T>,
    status: RequestStatus,
    error: Option<String>,
}

impl<T> Default for SliceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            user_items: Vec::new(),
            current: None,
            status: RequestStatus::Idle,
            error: None,
        }
    }
}

impl<T> SliceState<T> {
    /// Every record known to the slice, in arrival order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Records created by the current user during this process.
    pub fn user_items(&self) -> &[T] {
        &self.user_items
    }

    /// The record currently being viewed.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Message of the most recent rejection, cleared when a request starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

impl<T> SliceState<T>
where
    T: Identified + Clone,
{
    /// Apply one event.
    pub fn apply(&mut self, event: SliceEvent<T>) {
        match event {
            SliceEvent::Started(_) => {
                self.status = RequestStatus::Pending;
                self.error = None;
            }
            SliceEvent::Fetched(items) => {
                self.items = items;
                self.status = RequestStatus::Fulfilled;
            }
            SliceEvent::Created(item) => {
                self.items.push(item.clone());
                self.user_items.push(item);
                self.status = RequestStatus::Fulfilled;
            }
            SliceEvent::Updated(item) => {
                replace_matching(&mut self.items, &item);
                replace_matching(&mut self.user_items, &item);
                if let Some(current) = self.current.as_mut().filter(|c| c.id() == item.id()) {
                    *current = item;
                }
                self.status = RequestStatus::Fulfilled;
            }
            SliceEvent::Failed { message, .. } => {
                self.status = RequestStatus::Rejected;
                self.error = Some(message);
            }
            SliceEvent::Cancelled(_) => self.settle_cancelled(),
            SliceEvent::CurrentSelected(item) => self.current = item,
        }
    }

    fn settle_cancelled(&mut self) {
        if self.status == RequestStatus::Pending {
            self.status = RequestStatus::Idle;
        }
    }
}

fn replace_matching<T>(items: &mut [T], replacement: &T)
where
    T: Identified + Clone,
{
    for item in items.iter_mut().filter(|i| i.id() == replacement.id()) {
        *item = replacement.clone();
    }
}

/// Outcome events for the user profile slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    Started(SliceOperation),
    Loaded(UserProfile),
    Updated(UserProfile),
    Failed {
        operation: SliceOperation,
        message: String,
    },
    Cancelled(SliceOperation),
}

/// State of the user profile slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    profile: Option<UserProfile>,
    status: RequestStatus,
    error: Option<String>,
}

impl ProfileState {
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Apply one event.
    pub fn apply(&mut self, event: ProfileEvent) {
        match event {
            ProfileEvent::Started(_) => {
                self.status = RequestStatus::Pending;
                self.error = None;
            }
            ProfileEvent::Loaded(profile) | ProfileEvent::Updated(profile) => {
                self.profile = Some(profile);
                self.status = RequestStatus::Fulfilled;
            }
            ProfileEvent::Failed { message, .. } => {
                self.status = RequestStatus::Rejected;
                self.error = Some(message);
            }
            ProfileEvent::Cancelled(_) => {
                if self.status == RequestStatus::Pending {
                    self.status = RequestStatus::Idle;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "slice_tests.rs"]
mod tests;
