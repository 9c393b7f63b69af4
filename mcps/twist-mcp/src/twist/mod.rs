//! Twist v3 HTTP API gateway
//!
//! [`TwistApi`] is the seam between tool handlers and the network;
//! [`TwistClient`] is the reqwest-backed implementation.

pub mod client;
pub mod error;
pub mod params;

pub use client::{TwistApi, TwistClient};
pub use error::{TwistError, TwistResult};
pub use params::RequestParams;
