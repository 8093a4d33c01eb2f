//! Animation: a set of tracks plus the playback clock that samples them.
//!
//! States: Stopped -> Playing -> {Paused, Stopped}. `current_time` stays in
//! `[0, length]` at every observation point; `length` is derived from the
//! tracks whenever they change.

use log::{debug, trace, warn};
use lupine_api_core::Value;

use crate::interp::{CurveKind, EasingKind};
use crate::keyframe::Keyframe;
use crate::outputs::{AnimationEvent, ApplyReport};
use crate::scene::{resolve_path, SceneNode};
use crate::track::Track;

/// Length of an animation without tracks.
pub const EMPTY_LENGTH: f32 = 1.0;
/// Shortest length an animation with tracks can have.
pub const MIN_LENGTH: f32 = 0.1;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub name: String,
    pub looping: bool,
    pub autoplay: bool,
    pub speed_scale: f32,
    tracks: Vec<Track>,
    length: f32,
    state: PlaybackState,
    current_time: f32,
}

impl Animation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            looping: false,
            autoplay: false,
            speed_scale: 1.0,
            tracks: Vec::new(),
            length: EMPTY_LENGTH,
            state: PlaybackState::Stopped,
            current_time: 0.0,
        }
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.add_track(track);
        self
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.state
    }

    // --- tracks ---

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
        self.refresh_length();
    }

    pub fn remove_track(&mut self, index: usize) -> Option<Track> {
        if index >= self.tracks.len() {
            return None;
        }
        let track = self.tracks.remove(index);
        self.refresh_length();
        Some(track)
    }

    /// Remove the first track bound to `target_path`/`property`.
    pub fn remove_track_for(&mut self, target_path: &str, property: &str) -> Option<Track> {
        let index = self.track_index(target_path, property)?;
        self.remove_track(index)
    }

    pub fn track(&self, target_path: &str, property: &str) -> Option<&Track> {
        self.track_index(target_path, property)
            .map(|i| &self.tracks[i])
    }

    /// Mutable access to a track. Call [`Animation::refresh_length`] after
    /// editing its keyframes.
    pub fn track_mut(&mut self, target_path: &str, property: &str) -> Option<&mut Track> {
        let index = self.track_index(target_path, property)?;
        self.tracks.get_mut(index)
    }

    fn track_index(&self, target_path: &str, property: &str) -> Option<usize> {
        self.tracks
            .iter()
            .position(|t| t.target_path == target_path && t.property_name == property)
    }

    pub fn tracks_for_target<'a>(
        &'a self,
        target_path: &'a str,
    ) -> impl Iterator<Item = &'a Track> + 'a {
        self.tracks.iter().filter(move |t| t.target_path == target_path)
    }

    /// Add a keyframe to the track at `track_index`, keeping the length current.
    /// Returns false when there is no such track.
    pub fn add_keyframe(
        &mut self,
        track_index: usize,
        time: f32,
        value: impl Into<Value>,
        curve: CurveKind,
        easing: EasingKind,
    ) -> bool {
        let Some(track) = self.tracks.get_mut(track_index) else {
            return false;
        };
        track.add_keyframe_with(Keyframe::new(time, value).with_curve(curve).with_easing(easing));
        self.refresh_length();
        true
    }

    /// Re-derive `length` from the tracks and clamp the cursor into it.
    pub fn refresh_length(&mut self) {
        self.length = if self.tracks.is_empty() {
            EMPTY_LENGTH
        } else {
            self.tracks
                .iter()
                .map(Track::duration)
                .fold(0.0, f32::max)
                .max(MIN_LENGTH)
        };
        self.current_time = self.current_time.clamp(0.0, self.length);
    }

    /// Copy named `<name>_copy` with the same tracks and a reset clock.
    pub fn duplicate(&self) -> Self {
        Self {
            name: format!("{}_copy", self.name),
            looping: self.looping,
            autoplay: self.autoplay,
            speed_scale: self.speed_scale,
            tracks: self.tracks.clone(),
            length: self.length,
            state: PlaybackState::Stopped,
            current_time: 0.0,
        }
    }

    // --- playback ---

    /// Start playing from `from_time`, clamped into `[0, length]`.
    pub fn play(&mut self, from_time: f32) {
        self.current_time = self.clamp_time(from_time);
        self.state = PlaybackState::Playing;
        debug!("animation '{}' playing from {:.3}", self.name, self.current_time);
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state != PlaybackState::Playing {
            self.state = PlaybackState::Playing;
        }
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.current_time = 0.0;
    }

    /// Move the cursor in any state. Clamped into `[0, length]`; NaN maps to 0.
    pub fn seek(&mut self, time: f32) {
        self.current_time = self.clamp_time(time);
    }

    fn clamp_time(&self, time: f32) -> f32 {
        if time.is_nan() {
            0.0
        } else {
            time.clamp(0.0, self.length)
        }
    }

    /// Advance the clock by `delta * speed_scale`.
    ///
    /// Returns the end-of-playback event this step triggered, if any. A
    /// negative speed runs the clock backwards; the start then acts as the end.
    pub fn update(&mut self, delta: f32) -> Option<AnimationEvent> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        let next = self.current_time + delta * self.speed_scale;
        if !next.is_finite() {
            warn!(
                "animation '{}' ignored non-finite step (delta {delta}, speed {})",
                self.name, self.speed_scale
            );
            return None;
        }
        trace!("animation '{}' t={:.4} -> {:.4}", self.name, self.current_time, next);

        if next >= self.length || next < 0.0 {
            if self.looping && self.length > 0.0 {
                let wrapped = next.rem_euclid(self.length);
                // rem_euclid may round up to the divisor for tiny negatives
                self.current_time = if wrapped < self.length { wrapped } else { 0.0 };
                return Some(AnimationEvent::Looped);
            }
            self.current_time = if next < 0.0 { 0.0 } else { self.length };
            self.state = PlaybackState::Stopped;
            debug!("animation '{}' finished", self.name);
            return Some(AnimationEvent::Finished);
        }

        self.current_time = next;
        None
    }

    /// `current_time / length` clamped to `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.length <= 0.0 {
            return 0.0;
        }
        (self.current_time / self.length).clamp(0.0, 1.0)
    }

    /// Sample every enabled track at the cursor and write it onto its target.
    ///
    /// Failures are isolated per track: they are logged and counted, and the
    /// remaining tracks still apply.
    pub fn apply_to_scene(&self, root: &mut dyn SceneNode) -> ApplyReport {
        let mut report = ApplyReport::default();
        for track in &self.tracks {
            if !track.enabled {
                report.skipped += 1;
                continue;
            }
            let Some(target) = resolve_path(&mut *root, &track.target_path) else {
                debug!(
                    "animation '{}': target '{}' not found, skipping '{}'",
                    self.name, track.target_path, track.property_name
                );
                report.skipped += 1;
                continue;
            };
            let value = match track.value_at_time(self.current_time) {
                Ok(Some(value)) => value,
                Ok(None) => {
                    report.skipped += 1;
                    continue;
                }
                Err(err) => {
                    warn!(
                        "animation '{}': sampling {}:{} failed: {}",
                        self.name, track.target_path, track.property_name, err
                    );
                    report.failed += 1;
                    continue;
                }
            };
            match track.apply_value(target, &value) {
                Ok(()) => report.applied += 1,
                Err(err) => {
                    warn!(
                        "animation '{}': applying {}:{} failed: {}",
                        self.name, track.target_path, track.property_name, err
                    );
                    report.failed += 1;
                }
            }
        }
        report
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new("New Animation")
    }
}
