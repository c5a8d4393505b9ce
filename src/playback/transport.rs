/*!
 * Abstract streaming-audio backend.
 *
 * The controller never talks to a concrete audio stack; it drives these
 * traits. Opening a stream is the only suspension point: once a handle
 * exists, pause/resume/stop are immediate control operations on an already
 * open resource.
 */

use async_trait::async_trait;
use std::fmt::Debug;
use url::Url;

use crate::errors::StreamError;

/// Callback invoked by the transport exactly once when the stream reaches
/// the end of its content (or the feed drops and the transport treats that
/// as completion)
pub type CompletionHandler = Box<dyn FnOnce() + Send + 'static>;

/// Factory for open audio streams
#[async_trait]
pub trait StreamTransport: Send + Sync + Debug {
    /// Open the stream at `source`, ready to play.
    ///
    /// # Arguments
    /// * `source` - URL of the audio resource
    ///
    /// # Returns
    /// * `Result<Box<dyn StreamHandle>, StreamError>` - An exclusively owned
    ///   handle on success, or the open failure
    async fn open(&self, source: &Url) -> Result<Box<dyn StreamHandle>, StreamError>;
}

/// Exclusive ownership token for one open audio stream.
///
/// Held only by the playback controller and never exposed to callers.
/// Dropping or releasing the handle must free the underlying resource.
pub trait StreamHandle: Send {
    /// Pause decoding, keeping the current position
    fn pause(&mut self) -> Result<(), StreamError>;

    /// Resume decoding from the paused position
    fn resume(&mut self) -> Result<(), StreamError>;

    /// Stop decoding and reset the position to the start of the stream
    fn stop(&mut self) -> Result<(), StreamError>;

    /// Install the completion callback for this stream.
    ///
    /// Replaces any previously installed handler.
    fn set_completion_handler(&mut self, handler: CompletionHandler);

    /// Tear the stream down and free the underlying resource
    fn release(self: Box<Self>);
}
