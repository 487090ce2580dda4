//! petstore_client - Client and CLI for the public pet store API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::PetstoreClient;
pub use error::{ClientError, Result};
