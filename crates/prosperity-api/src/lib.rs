//! Client for the IMC Prosperity submissions API.

pub mod http_client;
pub mod submissions;

pub use submissions::{AlgorithmFetching, FetchError, SubmissionsClient, TransportError};

#[cfg(any(test, feature = "test-util"))]
pub use submissions::MockAlgorithmFetching;
