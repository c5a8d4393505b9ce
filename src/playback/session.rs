use serde::{Deserialize, Serialize};

// @module: Playback session state types

/// Identifier of a playable item, e.g. one chapter of a recitation catalog
pub type TrackId = u64;

/// Externally visible status of the single playback session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// No session exists; nothing is loaded
    #[default]
    Idle,

    /// A stream open is in flight for the current track
    Loading,

    /// The current track is audibly playing
    Playing,

    /// The current track is loaded but paused
    Paused,
}

impl PlaybackStatus {
    // @returns: Lowercase status identifier
    pub fn as_str(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Point-in-time view of the controller, handed to the presentation layer.
///
/// Drives per-item button enablement: "Pause" is only live for the item
/// whose id matches `track` while `status` is `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Track the session is bound to, if any
    pub track: Option<TrackId>,

    /// Current session status
    pub status: PlaybackStatus,
}

impl PlaybackSnapshot {
    /// Snapshot of an idle controller
    pub fn idle() -> Self {
        PlaybackSnapshot {
            track: None,
            status: PlaybackStatus::Idle,
        }
    }

    /// Whether the given track is the one currently playing
    pub fn is_playing(&self, track: TrackId) -> bool {
        self.status == PlaybackStatus::Playing && self.track == Some(track)
    }
}

/// What a play request actually did.
///
/// A request is never an error just because the controller was busy or the
/// track was already active; the caller learns which transition happened and
/// can surface feedback accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A fresh stream was opened and playback started
    Started,

    /// The request targeted the paused current track and resumed it
    Resumed,

    /// The request targeted the playing current track and paused it
    TogglePaused,

    /// Dropped: another open was already in flight
    Busy,

    /// The open resolved after the session had moved on; the fresh stream
    /// was released and nothing else happened
    Discarded,
}
