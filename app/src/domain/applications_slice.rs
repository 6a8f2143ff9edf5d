//! Applications slice service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::application::{Application, ApplicationDraft, ApplicationInput};
use super::error::StoreError;
use super::ports::{ApiRequest, ApiResponse, MarketplaceTransport};
use super::project::Project;
use super::slice::{SliceEvent, SliceOperation, SliceState};
use super::slice_driver::{SliceDriver, reject_input};
use super::state::StoreEvent;
use super::store::Store;

const SLICE: &str = "applications";

/// Operations on the applications slice.
pub struct ApplicationsSlice<T> {
    driver: SliceDriver<T, SliceEvent<Application>>,
}

impl<T> Clone for ApplicationsSlice<T> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
        }
    }
}

impl<T> ApplicationsSlice<T>
where
    T: MarketplaceTransport,
{
    /// Create the slice service over a shared store and transport.
    pub fn new(store: Arc<Store>, transport: Arc<T>) -> Self {
        Self {
            driver: SliceDriver::new(SLICE, store, transport, StoreEvent::Applications),
        }
    }

    /// Snapshot of the slice.
    pub fn state(&self) -> SliceState<Application> {
        self.driver
            .store()
            .read(|state| state.applications().clone())
    }

    /// Fetch the user's applications, replacing `items` on success.
    pub async fn fetch_all(
        &self,
        cancel: CancellationToken,
    ) -> Result<Vec<Application>, StoreError> {
        self.driver
            .run(
                SliceOperation::Fetch,
                ApiRequest::ListApplications,
                cancel,
                ApiResponse::into_applications,
                SliceEvent::Fetched,
            )
            .await
    }

    /// Validate `input` against `project` and submit it.
    ///
    /// Compensation is mandatory for paid projects. The submitted
    /// application starts `Pending`.
    pub async fn create(
        &self,
        project: &Project,
        input: ApplicationInput,
        cancel: CancellationToken,
    ) -> Result<Application, StoreError> {
        let draft = ApplicationDraft::try_new(project, input)
            .map_err(|err| reject_input(SLICE, err.to_string()))?;

        self.driver
            .run(
                SliceOperation::Create,
                ApiRequest::CreateApplication { draft },
                cancel,
                ApiResponse::into_application,
                SliceEvent::Created,
            )
            .await
    }

    pub fn set_current(&self, application: Option<Application>) {
        self.driver
            .dispatch(SliceEvent::CurrentSelected(application));
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{MockMarketplaceTransport, TransportError};
    use crate::domain::test_fixtures::{fixture_timestamp, project};
    use crate::domain::{ApplicationId, ApplicationStatus, ErrorCode, RequestStatus};

    fn input() -> ApplicationInput {
        ApplicationInput {
            cover_letter: "I have shipped three React apps.".to_owned(),
            expected_compensation: Some("$1,000".to_owned()),
            availability: "20 hours per week".to_owned(),
            portfolio_url: Some("https://portfolio.example.com".to_owned()),
        }
    }

    fn echo_backend() -> MockMarketplaceTransport {
        let mut transport = MockMarketplaceTransport::new();
        transport
            .expect_perform()
            .returning(|request, _cancel| match request {
                ApiRequest::CreateApplication { draft } => Ok(ApiResponse::Application(
                    Application::from_draft(ApplicationId::random(), draft, fixture_timestamp()),
                )),
                ApiRequest::ListApplications => Ok(ApiResponse::Applications(Vec::new())),
                other => Err(TransportError::rejected(other.name())),
            });
        transport
    }

    fn slice_over(
        transport: MockMarketplaceTransport,
    ) -> (Arc<Store>, ApplicationsSlice<MockMarketplaceTransport>) {
        let store = Arc::new(Store::new());
        let slice = ApplicationsSlice::new(Arc::clone(&store), Arc::new(transport));
        (store, slice)
    }

    #[tokio::test]
    async fn submitted_application_is_pending_and_tracked() {
        let (_store, slice) = slice_over(echo_backend());
        let target = project("Landing page");

        let application = slice
            .create(&target, input(), CancellationToken::new())
            .await
            .expect("submission succeeds");

        assert_eq!(application.project_id, target.id);
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.applied_at, fixture_timestamp());
        let state = slice.state();
        assert_eq!(state.items(), std::slice::from_ref(&application));
        assert_eq!(state.user_items(), std::slice::from_ref(&application));
        assert_eq!(state.status(), RequestStatus::Fulfilled);
    }

    #[rstest]
    #[case::blank_cover_letter(ApplicationInput { cover_letter: "  ".to_owned(), ..input() })]
    #[case::missing_compensation(ApplicationInput { expected_compensation: None, ..input() })]
    #[case::bad_portfolio(ApplicationInput { portfolio_url: Some("not a url".to_owned()), ..input() })]
    #[tokio::test]
    async fn invalid_input_never_reaches_the_backend(#[case] bad: ApplicationInput) {
        let mut transport = MockMarketplaceTransport::new();
        transport.expect_perform().times(0);
        let (store, slice) = slice_over(transport);

        let err = slice
            .create(&project("Paid"), bad, CancellationToken::new())
            .await
            .expect_err("input rejected");

        assert_eq!(err.code(), Some(ErrorCode::InvalidRequest));
        assert_eq!(store.sequence(), 0);
    }

    #[tokio::test]
    async fn unpaid_projects_accept_missing_compensation() {
        let (_store, slice) = slice_over(echo_backend());
        let mut target = project("Volunteer");
        target.is_paid = false;

        let application = slice
            .create(
                &target,
                ApplicationInput {
                    expected_compensation: None,
                    ..input()
                },
                CancellationToken::new(),
            )
            .await
            .expect("submission succeeds");

        assert_eq!(application.expected_compensation, None);
    }

    #[tokio::test]
    async fn fetch_failure_is_recorded() {
        let mut transport = MockMarketplaceTransport::new();
        transport
            .expect_perform()
            .times(1)
            .return_once(|_, _| Err(TransportError::unavailable("offline")));
        let (_store, slice) = slice_over(transport);

        let err = slice
            .fetch_all(CancellationToken::new())
            .await
            .expect_err("fetch fails");

        assert!(matches!(err, StoreError::Fetch(_)));
        let state = slice.state();
        assert_eq!(state.status(), RequestStatus::Rejected);
        assert!(state.error().is_some());
    }

    #[tokio::test]
    async fn set_current_selects_without_touching_lists() {
        let (_store, slice) = slice_over(echo_backend());
        let application = slice
            .create(&project("Site"), input(), CancellationToken::new())
            .await
            .expect("submission succeeds");

        slice.set_current(Some(application.clone()));

        let state = slice.state();
        assert_eq!(state.current(), Some(&application));
        assert_eq!(state.items().len(), 1);
    }
}
