//! Outbound adapters implementing domain ports.
//!
//! - **simulated_api**: the in-process marketplace backend
//! - **catalogue**: project listings backing the simulated backend
//! - **session_store**: file and in-memory session record storage

pub mod catalogue;
pub mod session_store;
pub mod simulated_api;
