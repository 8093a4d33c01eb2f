//! AnimationPlayer: owns a library and drives one current animation per tick.
//!
//! The current animation is a name key into the library, never a second
//! owner. Speed is applied once: `play` copies `playback_speed` into the
//! animation's `speed_scale` and `process` hands the raw frame delta to
//! `Animation::update`.

use std::collections::VecDeque;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::config::Config;
use crate::error::AnimationError;
use crate::library::AnimationLibrary;
use crate::outputs::{AnimationEvent, ApplyReport, PlayerEvent};
use crate::scene::SceneNode;
use crate::stored_animation::{self, SkippedAnimation, StoredLibrary};

#[derive(Debug, Default)]
pub struct AnimationPlayer {
    library: AnimationLibrary,
    current: Option<String>,
    config: Config,
    events: VecDeque<PlayerEvent>,
}

impl AnimationPlayer {
    pub fn new(config: Config) -> Self {
        Self {
            library: AnimationLibrary::new(),
            current: None,
            config,
            events: VecDeque::new(),
        }
    }

    pub fn with_library(config: Config, library: AnimationLibrary) -> Self {
        Self {
            library,
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn library(&self) -> &AnimationLibrary {
        &self.library
    }

    pub fn playback_speed(&self) -> f32 {
        self.config.playback_speed
    }

    /// Change the speed multiplier, including for the animation already playing.
    pub fn set_playback_speed(&mut self, speed: f32) {
        self.config.playback_speed = speed;
        if let Some(anim) = self.current_animation_mut() {
            anim.speed_scale = speed;
        }
    }

    pub fn set_autoplay_animation(&mut self, name: Option<String>) {
        self.config.autoplay_animation = name;
    }

    // --- library management ---

    pub fn add_animation(&mut self, animation: Animation) {
        self.library.add_animation(animation);
    }

    /// Remove an animation, stopping it first if it is the current one.
    pub fn remove_animation(&mut self, name: &str) -> Option<Animation> {
        if self.current.as_deref() == Some(name) {
            self.stop();
        }
        self.library.remove_animation(name)
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.library.contains(name)
    }

    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.library.get(name)
    }

    pub fn animation_names(&self) -> Vec<String> {
        self.library.names()
    }

    /// Replace the whole library. Any current animation is stopped.
    pub fn set_library(&mut self, library: AnimationLibrary) {
        self.stop();
        self.library = library;
    }

    // --- playback ---

    /// Play `name` (the library default when empty) from `from`.
    ///
    /// Returns false, changing nothing, when there is no such animation.
    pub fn play(&mut self, name: &str, from: f32) -> bool {
        let name = if name.is_empty() {
            match self.library.default_animation() {
                Some(default) => default.to_string(),
                None => return false,
            }
        } else {
            name.to_string()
        };
        if !self.library.contains(&name) {
            debug!("play: no animation named '{}'", name);
            return false;
        }

        if let Some(previous) = self.current_animation_mut() {
            previous.stop();
        }
        let speed = self.config.playback_speed;
        if let Some(anim) = self.library.get_mut(&name) {
            anim.speed_scale = speed;
            anim.play(from);
        }
        self.current = Some(name.clone());
        self.push_event(PlayerEvent::Started {
            animation: name.clone(),
        });
        self.push_event(PlayerEvent::Changed { animation: name });
        true
    }

    /// Stop and forget the current animation.
    pub fn stop(&mut self) {
        if let Some(anim) = self.current_animation_mut() {
            anim.stop();
        }
        self.current = None;
    }

    pub fn pause(&mut self) {
        if let Some(anim) = self.current_animation_mut() {
            anim.pause();
        }
    }

    pub fn resume(&mut self) {
        if let Some(anim) = self.current_animation_mut() {
            anim.resume();
        }
    }

    pub fn seek(&mut self, position: f32) {
        if let Some(anim) = self.current_animation_mut() {
            anim.seek(position);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.current_animation().is_some_and(Animation::is_playing)
    }

    pub fn current_animation_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_animation(&self) -> Option<&Animation> {
        self.current.as_deref().and_then(|name| self.library.get(name))
    }

    fn current_animation_mut(&mut self) -> Option<&mut Animation> {
        let name = self.current.as_deref()?;
        self.library.get_mut(name)
    }

    pub fn current_position(&self) -> f32 {
        self.current_animation().map_or(0.0, Animation::current_time)
    }

    pub fn current_length(&self) -> f32 {
        self.current_animation().map_or(0.0, Animation::length)
    }

    /// Per-frame driver: advance the current animation by `delta` and write
    /// its sampled values under `root`. Does nothing unless it is playing.
    pub fn process(&mut self, delta: f32, root: &mut dyn SceneNode) -> ApplyReport {
        let Some(name) = self.current.clone() else {
            return ApplyReport::default();
        };
        let Some(anim) = self.library.get_mut(&name) else {
            return ApplyReport::default();
        };
        if !anim.is_playing() {
            return ApplyReport::default();
        }

        let event = anim.update(delta);
        let report = anim.apply_to_scene(root);
        match event {
            Some(AnimationEvent::Finished) => {
                self.push_event(PlayerEvent::Finished { animation: name })
            }
            Some(AnimationEvent::Looped) => {
                self.push_event(PlayerEvent::Looped { animation: name })
            }
            None => {}
        }
        report
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: PlayerEvent) {
        let cap = self.config.max_events;
        if cap == 0 {
            return;
        }
        while self.events.len() >= cap {
            if let Some(dropped) = self.events.pop_front() {
                warn!("player event queue full, dropping {:?}", dropped);
            }
        }
        self.events.push_back(event);
    }

    /// Scene-entry hook: load `animation_file` if configured and present, then
    /// start `autoplay_animation` if the library has it.
    pub fn ready(&mut self) -> Result<(), AnimationError> {
        if let Some(file) = self.config.animation_file.clone().filter(|f| !f.is_empty()) {
            if Path::new(&file).exists() {
                self.load_animation_file(&file)?;
            } else {
                debug!("animation file '{}' does not exist yet", file);
            }
        }
        if let Some(name) = self.config.autoplay_animation.clone() {
            if self.library.contains(&name) {
                self.play(&name, 0.0);
            }
        }
        Ok(())
    }

    // --- persistence ---

    /// Save the library as JSON and remember the path as `animation_file`.
    pub fn save_animation_file(&mut self, path: impl AsRef<Path>) -> Result<(), AnimationError> {
        let path = path.as_ref();
        stored_animation::save_library(path, &self.library)?;
        self.config.animation_file = Some(path.to_string_lossy().into_owned());
        Ok(())
    }

    /// Replace the library with the file's contents. Entries that failed to
    /// decode are returned; the rest are loaded.
    pub fn load_animation_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<SkippedAnimation>, AnimationError> {
        let path = path.as_ref();
        let load = stored_animation::load_library(path)?;
        self.set_library(load.library);
        self.config.animation_file = Some(path.to_string_lossy().into_owned());
        Ok(load.skipped)
    }

    /// Persist the player settings together with its library.
    pub fn to_json(&self) -> Result<String, AnimationError> {
        let stored = StoredPlayer {
            autoplay_animation: self.config.autoplay_animation.clone(),
            playback_speed: self.config.playback_speed,
            animation_file: self.config.animation_file.clone(),
            animation_library: Some(stored_animation::encode_library(&self.library)),
        };
        Ok(serde_json::to_string_pretty(&stored)?)
    }

    /// Restore a player from [`AnimationPlayer::to_json`] output. Broken
    /// animations in the embedded library are skipped.
    pub fn from_json(s: &str) -> Result<Self, AnimationError> {
        let stored: StoredPlayer<serde_json::Value> = serde_json::from_str(s)?;
        let config = Config {
            playback_speed: stored.playback_speed,
            autoplay_animation: non_empty(stored.autoplay_animation),
            animation_file: non_empty(stored.animation_file),
            ..Config::default()
        };
        let library = stored
            .animation_library
            .map(|raw| stored_animation::decode_library(raw).library)
            .unwrap_or_default();
        Ok(Self::with_library(config, library))
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

fn default_speed() -> f32 {
    1.0
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPlayer<A> {
    #[serde(default)]
    autoplay_animation: Option<String>,
    #[serde(default = "default_speed")]
    playback_speed: f32,
    #[serde(default)]
    animation_file: Option<String>,
    #[serde(default = "Option::default")]
    animation_library: Option<StoredLibrary<A>>,
}
