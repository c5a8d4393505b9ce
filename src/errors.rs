/*!
 * Error types for the rehal library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when fetching content from a remote source
#[derive(Error, Debug)]
pub enum FetchError {
    /// Error when making a request fails before a response is received
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Error when decoding a response body fails
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Error returned by the remote API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error when a resource descriptor does not address anything this source serves
    #[error("Invalid resource descriptor: {0}")]
    InvalidDescriptor(String),
}

/// Errors that can occur when opening or driving an audio stream
#[derive(Error, Debug)]
pub enum StreamError {
    /// The transport could not open the requested source
    #[error("Failed to open stream: {0}")]
    OpenFailed(String),

    /// The transport rejected an operation because the stream is gone
    #[error("Stream transport closed: {0}")]
    TransportClosed(String),

    /// The network feed was interrupted mid-playback
    #[error("Stream interrupted: {0}")]
    Interrupted(String),
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a content fetch
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from the audio stream transport
    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    /// Error from a configuration operation
    #[error("Config error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
