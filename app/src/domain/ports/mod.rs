//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod session_store;
mod transport;

#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{SessionStore, SessionStoreError};
#[cfg(test)]
pub use transport::MockMarketplaceTransport;
pub use transport::{ApiRequest, ApiResponse, MarketplaceTransport, TransportError};
