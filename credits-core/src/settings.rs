//! Playback settings and music cues.
//!
//! These records are handed to the presentation layer untouched; nothing in
//! the core evaluates curves or plays audio.

use serde::{Deserialize, Serialize};

use crate::assets::{AudioRef, CurveRef};
use crate::model::StartingPosition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub speed_curve: Option<CurveRef>,
    pub opacity_curve: Option<CurveRef>,
    pub volume_curve: Option<CurveRef>,
    pub credits_starting_position: StartingPosition,
    pub time_dilation_affects_credits: bool,
    pub auto_play_music: bool,
    pub restart_music_at_end: bool,
    pub end_credits_on_end_reached: bool,
    pub stop_music_on_credits_ended: bool,
    pub stop_queueing_music_when_credits_ended: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            speed_curve: Some(CurveRef::new("CreditsSpeedCurve")),
            opacity_curve: Some(CurveRef::new("CreditsOpacityCurve")),
            volume_curve: Some(CurveRef::new("MusicVolumeCurve")),
            credits_starting_position: StartingPosition::Top,
            time_dilation_affects_credits: true,
            auto_play_music: true,
            restart_music_at_end: true,
            end_credits_on_end_reached: true,
            stop_music_on_credits_ended: false,
            stop_queueing_music_when_credits_ended: true,
        }
    }
}

/// How a cue joins the music queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueMode {
    /// Starts automatically once the previous cue finishes.
    #[default]
    AfterPrevious,
    /// Only plays when the host asks for it.
    DoNotAutoQueue,
    /// Never plays.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicCue {
    pub audio: AudioRef,
    #[serde(default)]
    pub queue_mode: QueueMode,
    /// Offset into the track, in seconds.
    #[serde(default)]
    pub start_time: f32,
    /// Silence before the track starts, in seconds.
    #[serde(default)]
    pub play_delay: f32,
}

impl MusicCue {
    pub fn new(audio: AudioRef, queue_mode: QueueMode, start_time: f32, play_delay: f32) -> Self {
        Self { audio, queue_mode, start_time, play_delay }
    }

    pub fn is_auto_queued(&self) -> bool {
        self.queue_mode == QueueMode::AfterPrevious
    }

    pub fn is_playable(&self) -> bool {
        self.queue_mode != QueueMode::Skip
    }
}

/// Cues that play on their own, in authored order.
pub fn auto_queue(cues: &[MusicCue]) -> impl Iterator<Item = &MusicCue> {
    cues.iter().filter(|cue| cue.is_auto_queued())
}
