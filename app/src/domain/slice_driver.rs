//! Request lifecycle shared by every slice service.
//!
//! A driver dispatches `Started`, awaits the transport and then dispatches
//! exactly one terminal event: the success event, `Failed` or `Cancelled`.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::error::{Error, StoreError};
use super::ports::{ApiRequest, ApiResponse, MarketplaceTransport, TransportError};
use super::slice::{ProfileEvent, SliceEvent, SliceOperation};
use super::state::StoreEvent;
use super::store::Store;

/// Map a settled transport failure to a domain error.
pub(crate) fn map_transport_error(error: &TransportError) -> Error {
    match error {
        TransportError::Unavailable { .. } => Error::service_unavailable(error.to_string()),
        TransportError::Rejected { .. } => Error::invalid_request(error.to_string()),
        TransportError::Cancelled | TransportError::UnexpectedResponse { .. } => {
            Error::internal(error.to_string())
        }
    }
}

/// Lifecycle events every slice understands.
pub(crate) trait LifecycleEvent {
    fn started(operation: SliceOperation) -> Self;
    fn failed(operation: SliceOperation, message: String) -> Self;
    fn cancelled(operation: SliceOperation) -> Self;
}

impl<T> LifecycleEvent for SliceEvent<T> {
    fn started(operation: SliceOperation) -> Self {
        Self::Started(operation)
    }

    fn failed(operation: SliceOperation, message: String) -> Self {
        Self::Failed { operation, message }
    }

    fn cancelled(operation: SliceOperation) -> Self {
        Self::Cancelled(operation)
    }
}

impl LifecycleEvent for ProfileEvent {
    fn started(operation: SliceOperation) -> Self {
        Self::Started(operation)
    }

    fn failed(operation: SliceOperation, message: String) -> Self {
        Self::Failed { operation, message }
    }

    fn cancelled(operation: SliceOperation) -> Self {
        Self::Cancelled(operation)
    }
}

/// Runs requests for one slice and routes its events into the store.
pub(crate) struct SliceDriver<T, E> {
    slice: &'static str,
    store: Arc<Store>,
    transport: Arc<T>,
    wrap: fn(E) -> StoreEvent,
}

impl<T, E> Clone for SliceDriver<T, E> {
    fn clone(&self) -> Self {
        Self {
            slice: self.slice,
            store: Arc::clone(&self.store),
            transport: Arc::clone(&self.transport),
            wrap: self.wrap,
        }
    }
}

impl<T, E> SliceDriver<T, E>
where
    T: MarketplaceTransport,
    E: LifecycleEvent,
{
    pub(crate) fn new(
        slice: &'static str,
        store: Arc<Store>,
        transport: Arc<T>,
        wrap: fn(E) -> StoreEvent,
    ) -> Self {
        Self {
            slice,
            store,
            transport,
            wrap,
        }
    }

    pub(crate) fn store(&self) -> &Store {
        &self.store
    }

    pub(crate) fn dispatch(&self, event: E) -> u64 {
        self.store.dispatch((self.wrap)(event))
    }

    /// Perform `request` as `operation`, applying `fulfilled` to the
    /// extracted payload on success.
    pub(crate) async fn run<R>(
        &self,
        operation: SliceOperation,
        request: ApiRequest,
        cancel: CancellationToken,
        extract: fn(ApiResponse) -> Result<R, TransportError>,
        fulfilled: fn(R) -> E,
    ) -> Result<R, StoreError>
    where
        R: Clone,
    {
        let request_name = request.name();
        self.dispatch(E::started(operation));
        debug!(slice = self.slice, request = request_name, "request dispatched");

        let result = self
            .transport
            .perform(request, cancel)
            .await
            .and_then(extract);

        match result {
            Ok(payload) => {
                self.dispatch(fulfilled(payload.clone()));
                debug!(slice = self.slice, request = request_name, "request fulfilled");
                Ok(payload)
            }
            Err(TransportError::Cancelled) => {
                self.dispatch(E::cancelled(operation));
                warn!(slice = self.slice, request = request_name, "request cancelled");
                Err(StoreError::Cancelled)
            }
            Err(error) => {
                let error = map_transport_error(&error);
                self.dispatch(E::failed(operation, error.message().to_owned()));
                warn!(
                    slice = self.slice,
                    request = request_name,
                    code = ?error.code(),
                    error = %error,
                    "request rejected"
                );
                Err(StoreError::for_operation(operation, error))
            }
        }
    }
}

/// Log and build the error for input rejected before any request.
pub(crate) fn reject_input(slice: &'static str, message: impl Into<String>) -> StoreError {
    reject(slice, Error::invalid_request(message))
}

/// Log and build the error for a reference to a record the slice lacks.
pub(crate) fn reject_unknown(slice: &'static str, message: impl Into<String>) -> StoreError {
    reject(slice, Error::not_found(message))
}

fn reject(slice: &'static str, error: Error) -> StoreError {
    warn!(slice, code = ?error.code(), error = %error, "input rejected");
    StoreError::Validation(error)
}
