//! Web client and routes for resolving livestream room ids.

pub mod client;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

pub use client::WebClient;
pub use routes::{ClientRoute, RoomIdApiRoute};
