/*!
 * Exclusive playback controller.
 *
 * At most one audio stream is ever open at a time, system-wide. The
 * controller owns the single stream handle behind serialized entry points;
 * rendered list items never see the handle, only state snapshots. A play
 * request on the active track toggles pause/resume, a request on a different
 * track releases the current stream before opening the next one, and a
 * request arriving while an open is already in flight is dropped and
 * reported as `Busy`.
 */

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use log::{debug, warn};
use parking_lot::Mutex;
use url::Url;

use crate::errors::StreamError;
use super::session::{PlaybackSnapshot, PlaybackStatus, RequestOutcome, TrackId};
use super::transport::{CompletionHandler, StreamHandle, StreamTransport};

/// Identifier of a registered state-change listener
pub type SubscriptionId = u64;

type Listener = Arc<dyn Fn(&PlaybackSnapshot) + Send + Sync + 'static>;

/// Internal session state, carrying the bound track where one exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    Loading(TrackId),
    Playing(TrackId),
    Paused(TrackId),
}

impl SessionState {
    fn snapshot(&self) -> PlaybackSnapshot {
        match *self {
            Self::Idle => PlaybackSnapshot::idle(),
            Self::Loading(track) => PlaybackSnapshot {
                track: Some(track),
                status: PlaybackStatus::Loading,
            },
            Self::Playing(track) => PlaybackSnapshot {
                track: Some(track),
                status: PlaybackStatus::Playing,
            },
            Self::Paused(track) => PlaybackSnapshot {
                track: Some(track),
                status: PlaybackStatus::Paused,
            },
        }
    }
}

struct Inner {
    /// Current session state
    state: SessionState,

    /// The single stream handle; Some only in Playing or Paused
    handle: Option<Box<dyn StreamHandle>>,

    /// Bumped whenever the session slot is reassigned or torn down, so a
    /// stream open or completion callback that resolves late can recognize
    /// it is stale
    generation: u64,

    /// Chosen source variant per track (e.g. the selected reciter)
    selections: HashMap<TrackId, Url>,

    /// Registered state-change listeners
    listeners: HashMap<SubscriptionId, Listener>,

    /// Next subscription id to hand out
    next_subscription: SubscriptionId,
}

impl Inner {
    /// Snapshot the committed state together with the listeners to notify.
    ///
    /// Listeners are invoked after the lock is dropped, so a listener may
    /// call back into the controller without deadlocking.
    fn committed(&self) -> (PlaybackSnapshot, Vec<Listener>) {
        (
            self.state.snapshot(),
            self.listeners.values().cloned().collect(),
        )
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        // Scoped acquisition: the stream never outlives the controller
        if let Some(handle) = self.handle.take() {
            handle.release();
        }
    }
}

/// Cloneable handle to the exclusive playback controller
#[derive(Clone)]
pub struct PlaybackController {
    transport: Arc<dyn StreamTransport>,
    inner: Arc<Mutex<Inner>>,
}

impl PlaybackController {
    /// Create a new controller driving the given transport
    pub fn new(transport: Arc<dyn StreamTransport>) -> Self {
        PlaybackController {
            transport,
            inner: Arc::new(Mutex::new(Inner {
                state: SessionState::Idle,
                handle: None,
                generation: 0,
                selections: HashMap::new(),
                listeners: HashMap::new(),
                next_subscription: 0,
            })),
        }
    }

    /// Handle a user play intent for `track` from `source`.
    ///
    /// On the already-playing track this pauses; on the paused current track
    /// it resumes; otherwise the current stream (if any) is released and a
    /// fresh one is opened. While an open is in flight any further request
    /// is dropped and reported as `Busy` so two opens can never race for the
    /// session slot.
    ///
    /// # Returns
    /// * `Ok(outcome)` - Which transition the request performed
    /// * `Err(StreamError)` - The stream could not be opened; the controller
    ///   is back to idle and the error is reported exactly once
    pub async fn request_play(
        &self,
        track: TrackId,
        source: Url,
    ) -> Result<RequestOutcome, StreamError> {
        let generation = {
            let mut inner = self.inner.lock();
            match inner.state {
                SessionState::Loading(current) => {
                    debug!(
                        "Play request for track {track} dropped: track {current} is still loading"
                    );
                    return Ok(RequestOutcome::Busy);
                }
                SessionState::Playing(current) if current == track => {
                    if let Some(handle) = inner.handle.as_mut() {
                        handle.pause()?;
                    }
                    inner.state = SessionState::Paused(track);
                    let (snapshot, listeners) = inner.committed();
                    drop(inner);
                    Self::fire(listeners, snapshot);
                    return Ok(RequestOutcome::TogglePaused);
                }
                SessionState::Paused(current) if current == track => {
                    if let Some(handle) = inner.handle.as_mut() {
                        handle.resume()?;
                    }
                    inner.state = SessionState::Playing(track);
                    let (snapshot, listeners) = inner.committed();
                    drop(inner);
                    Self::fire(listeners, snapshot);
                    return Ok(RequestOutcome::Resumed);
                }
                SessionState::Idle | SessionState::Playing(_) | SessionState::Paused(_) => {
                    // Release the previous stream before acquiring the next
                    if let Some(handle) = inner.handle.take() {
                        handle.release();
                    }
                    inner.generation += 1;
                    let generation = inner.generation;
                    inner.state = SessionState::Loading(track);
                    let (snapshot, listeners) = inner.committed();
                    drop(inner);
                    Self::fire(listeners, snapshot);
                    generation
                }
            }
        };

        // The only suspension point: open the stream with no lock held
        let opened = self.transport.open(&source).await;

        let mut inner = self.inner.lock();
        match opened {
            Ok(mut handle) => {
                if inner.generation != generation
                    || inner.state != SessionState::Loading(track)
                {
                    // The session moved on while the open was in flight
                    drop(inner);
                    handle.release();
                    debug!("Stream for track {track} resolved after the session moved on; released");
                    return Ok(RequestOutcome::Discarded);
                }

                handle.set_completion_handler(self.completion_handler(track, generation));
                inner.state = SessionState::Playing(track);
                inner.handle = Some(handle);
                let (snapshot, listeners) = inner.committed();
                drop(inner);
                Self::fire(listeners, snapshot);
                Ok(RequestOutcome::Started)
            }
            Err(e) => {
                if inner.generation == generation
                    && inner.state == SessionState::Loading(track)
                {
                    inner.state = SessionState::Idle;
                    let (snapshot, listeners) = inner.committed();
                    drop(inner);
                    Self::fire(listeners, snapshot);
                }
                warn!("Failed to open stream for track {track}: {e}");
                Err(e)
            }
        }
    }

    /// Pause the currently playing track. No-op unless something is playing.
    pub fn pause(&self) -> Result<(), StreamError> {
        let mut inner = self.inner.lock();
        if let SessionState::Playing(track) = inner.state {
            if let Some(handle) = inner.handle.as_mut() {
                handle.pause()?;
            }
            inner.state = SessionState::Paused(track);
            let (snapshot, listeners) = inner.committed();
            drop(inner);
            Self::fire(listeners, snapshot);
        }
        Ok(())
    }

    /// Stop playback, reset the position to the start and release the
    /// stream. From Loading the in-flight open is abandoned; the stream it
    /// eventually yields is released on arrival. A no-op from Idle.
    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        match inner.state {
            SessionState::Playing(_) | SessionState::Paused(_) => {
                if let Some(mut handle) = inner.handle.take() {
                    if let Err(e) = handle.stop() {
                        warn!("Stream refused stop; releasing anyway: {e}");
                    }
                    handle.release();
                }
                inner.state = SessionState::Idle;
                let (snapshot, listeners) = inner.committed();
                drop(inner);
                Self::fire(listeners, snapshot);
            }
            SessionState::Loading(_) => {
                inner.generation += 1;
                inner.state = SessionState::Idle;
                let (snapshot, listeners) = inner.committed();
                drop(inner);
                Self::fire(listeners, snapshot);
            }
            SessionState::Idle => {}
        }
    }

    /// Record the chosen source variant for a track.
    ///
    /// If that track is the active session, the current stream is stopped
    /// and released first; the controller never keeps playing a source the
    /// user just switched away from.
    pub fn select_source(&self, track: TrackId, source: Url) {
        let mut inner = self.inner.lock();
        let active = matches!(
            inner.state,
            SessionState::Loading(t) | SessionState::Playing(t) | SessionState::Paused(t)
                if t == track
        );

        if active {
            if let Some(mut handle) = inner.handle.take() {
                if let Err(e) = handle.stop() {
                    warn!("Stream refused stop during source switch: {e}");
                }
                handle.release();
            }
            // Also invalidates an open still in flight for this track
            inner.generation += 1;
            inner.state = SessionState::Idle;
            inner.selections.insert(track, source);
            let (snapshot, listeners) = inner.committed();
            drop(inner);
            Self::fire(listeners, snapshot);
            return;
        }

        inner.selections.insert(track, source);
    }

    /// The source variant previously selected for a track, if any
    pub fn selected_source(&self, track: TrackId) -> Option<Url> {
        self.inner.lock().selections.get(&track).cloned()
    }

    /// Current state, for driving per-item button rendering
    pub fn current_state(&self) -> PlaybackSnapshot {
        self.inner.lock().state.snapshot()
    }

    /// Register a listener invoked after every committed state transition
    pub fn on_state_change<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&PlaybackSnapshot) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_subscription;
        inner.next_subscription += 1;
        inner.listeners.insert(id, Arc::new(listener));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.lock().listeners.remove(&id).is_some()
    }

    /// Deterministically release any held stream and return to idle.
    ///
    /// Called when the hosting surface goes away; also happens implicitly
    /// when the last controller clone is dropped.
    pub fn teardown(&self) {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        if let Some(handle) = inner.handle.take() {
            handle.release();
        }
        if inner.state != SessionState::Idle {
            inner.state = SessionState::Idle;
            let (snapshot, listeners) = inner.committed();
            drop(inner);
            Self::fire(listeners, snapshot);
        }
    }

    /// Build the completion callback installed on a freshly opened stream.
    ///
    /// The callback captures the session generation; a completion signal
    /// from an already-released stream finds a newer generation and is
    /// ignored, so it can never reset a session it does not own.
    fn completion_handler(&self, track: TrackId, generation: u64) -> CompletionHandler {
        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        Box::new(move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut inner = shared.lock();
            if inner.generation != generation {
                return;
            }
            match inner.state {
                SessionState::Playing(t) | SessionState::Paused(t) if t == track => {
                    debug!("Track {track} reached end of content");
                    if let Some(handle) = inner.handle.take() {
                        handle.release();
                    }
                    inner.state = SessionState::Idle;
                    let (snapshot, listeners) = inner.committed();
                    drop(inner);
                    Self::fire(listeners, snapshot);
                }
                _ => {}
            }
        })
    }

    fn fire(listeners: Vec<Listener>, snapshot: PlaybackSnapshot) {
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
