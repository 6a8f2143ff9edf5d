//! Project Mate state core.
//!
//! The crate models the client-side state of a project marketplace: domain
//! slices with a tri-state request lifecycle, a store that aggregates them and
//! records every event for replay, an auth session manager backed by a durable
//! session record, and a simulated backend that resolves requests after an
//! artificial delay.

pub mod config;
pub mod domain;
pub mod outbound;
