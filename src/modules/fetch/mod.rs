//! Fetch module for remote image hosts
//!
//! Provides the `ImageFetcher` interface and a reqwest-backed client that
//! downloads image bytes from a caller-supplied URL.

mod remote_image_client;

pub use remote_image_client::{ImageFetcher, RemoteImageClient};
