//! User profile slice service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::error::StoreError;
use super::ports::{ApiRequest, ApiResponse, MarketplaceTransport};
use super::slice::{ProfileEvent, ProfileState, SliceOperation};
use super::slice_driver::{SliceDriver, reject_input};
use super::state::StoreEvent;
use super::store::Store;
use super::user::{UserId, UserProfile};

const SLICE: &str = "user";

/// Operations on the user profile slice.
pub struct UserSlice<T> {
    driver: SliceDriver<T, ProfileEvent>,
}

impl<T> Clone for UserSlice<T> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
        }
    }
}

impl<T> UserSlice<T>
where
    T: MarketplaceTransport,
{
    /// Create the slice service over a shared store and transport.
    pub fn new(store: Arc<Store>, transport: Arc<T>) -> Self {
        Self {
            driver: SliceDriver::new(SLICE, store, transport, StoreEvent::User),
        }
    }

    /// Snapshot of the slice.
    pub fn state(&self) -> ProfileState {
        self.driver.store().read(|state| state.user().clone())
    }

    /// Load the profile of `user_id`.
    pub async fn fetch(
        &self,
        user_id: UserId,
        cancel: CancellationToken,
    ) -> Result<UserProfile, StoreError> {
        self.driver
            .run(
                SliceOperation::Fetch,
                ApiRequest::GetProfile { user_id },
                cancel,
                ApiResponse::into_profile,
                ProfileEvent::Loaded,
            )
            .await
    }

    /// Replace the stored profile with `profile`.
    pub async fn update(
        &self,
        profile: UserProfile,
        cancel: CancellationToken,
    ) -> Result<UserProfile, StoreError> {
        profile
            .validate()
            .map_err(|err| reject_input(SLICE, err.to_string()))?;

        self.driver
            .run(
                SliceOperation::Update,
                ApiRequest::UpdateProfile { profile },
                cancel,
                ApiResponse::into_profile,
                ProfileEvent::Updated,
            )
            .await
    }
}
