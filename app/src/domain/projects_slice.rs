//! Projects slice service: browse, create and edit listings.

use std::sync::Arc;

use mockable::Clock;
use tokio_util::sync::CancellationToken;

use super::error::StoreError;
use super::ports::{ApiRequest, ApiResponse, MarketplaceTransport};
use super::project::{Creator, Project, ProjectDraft, ProjectId};
use super::project_query::ProjectQuery;
use super::slice::{SliceEvent, SliceOperation, SliceState};
use super::slice_driver::{SliceDriver, reject_input, reject_unknown};
use super::state::StoreEvent;
use super::store::Store;

const SLICE: &str = "projects";

/// Operations on the projects slice.
pub struct ProjectsSlice<T> {
    driver: SliceDriver<T, SliceEvent<Project>>,
    clock: Arc<dyn Clock>,
}

impl<T> Clone for ProjectsSlice<T> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<T> ProjectsSlice<T>
where
    T: MarketplaceTransport,
{
    /// Create the slice service over a shared store and transport.
    pub fn new(store: Arc<Store>, transport: Arc<T>, clock: Arc<dyn Clock>) -> Self {
        Self {
            driver: SliceDriver::new(SLICE, store, transport, StoreEvent::Projects),
            clock,
        }
    }

    /// Snapshot of the slice.
    pub fn state(&self) -> SliceState<Project> {
        self.driver.store().read(|state| state.projects().clone())
    }

    /// Fetch every listing, replacing `items` on success.
    pub async fn fetch_all(&self, cancel: CancellationToken) -> Result<Vec<Project>, StoreError> {
        self.driver
            .run(
                SliceOperation::Fetch,
                ApiRequest::ListProjects,
                cancel,
                ApiResponse::into_projects,
                SliceEvent::Fetched,
            )
            .await
    }

    /// Validate and create a listing owned by `creator`.
    ///
    /// The backend assigns the identifier and creation time. On success the
    /// listing is appended to `items` and `user_items` in one event.
    pub async fn create(
        &self,
        draft: ProjectDraft,
        creator: Creator,
        cancel: CancellationToken,
    ) -> Result<Project, StoreError> {
        let draft = draft
            .validate(self.clock.utc())
            .map_err(|err| reject_input(SLICE, err.to_string()))?;

        self.driver
            .run(
                SliceOperation::Create,
                ApiRequest::CreateProject { draft, creator },
                cancel,
                ApiResponse::into_project,
                SliceEvent::Created,
            )
            .await
    }

    /// Validate and apply an edit to the listing `id`.
    ///
    /// The listing must already be known to the slice. On success it is
    /// replaced in `items`, `user_items` and `current`.
    pub async fn update(
        &self,
        id: ProjectId,
        draft: ProjectDraft,
        cancel: CancellationToken,
    ) -> Result<Project, StoreError> {
        let Some(existing) = self.find(id) else {
            return Err(reject_unknown(SLICE, format!("project {id} not found")));
        };
        let draft = draft
            .validate(self.clock.utc())
            .map_err(|err| reject_input(SLICE, err.to_string()))?;

        self.driver
            .run(
                SliceOperation::Update,
                ApiRequest::UpdateProject {
                    project: Box::new(existing),
                    draft,
                },
                cancel,
                ApiResponse::into_project,
                SliceEvent::Updated,
            )
            .await
    }

    /// Select the listing currently being viewed. Never touches the lists.
    pub fn set_current(&self, project: Option<Project>) {
        self.driver.dispatch(SliceEvent::CurrentSelected(project));
    }

    /// Look a listing up across `items`, `user_items` and `current`.
    pub fn find(&self, id: ProjectId) -> Option<Project> {
        self.driver
            .store()
            .read(|state| state.projects().find(id).cloned())
    }

    /// Listings in `items` matching `query`.
    pub fn filter(&self, query: &ProjectQuery) -> Vec<Project> {
        self.driver.store().read(|state| {
            state
                .projects()
                .filter(query)
                .into_iter()
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
#[path = "projects_slice_tests.rs"]
mod tests;
