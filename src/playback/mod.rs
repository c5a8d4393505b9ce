/*!
 * Exclusive streaming-audio playback.
 *
 * This module contains the playback controller and the abstract transport it
 * drives. It is split into several submodules:
 *
 * - `session`: Session state, snapshots and request outcomes
 * - `transport`: Abstract stream transport and handle traits
 * - `controller`: The exclusive playback controller itself
 */

// Re-export main types for easier usage
pub use self::controller::{PlaybackController, SubscriptionId};
pub use self::session::{PlaybackSnapshot, PlaybackStatus, RequestOutcome, TrackId};
pub use self::transport::{CompletionHandler, StreamHandle, StreamTransport};

// Submodules
pub mod controller;
pub mod session;
pub mod transport;
