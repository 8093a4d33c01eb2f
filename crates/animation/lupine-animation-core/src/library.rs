//! Named animation registry.
//!
//! Entries keep insertion order. `default_animation`, when set, always names
//! an existing entry; removing the default promotes the first remaining entry.

use indexmap::IndexMap;
use log::debug;

use crate::animation::Animation;
use crate::error::AnimationError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationLibrary {
    animations: IndexMap<String, Animation>,
    default_animation: Option<String>,
}

impl AnimationLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by name. The first entry, and any entry flagged
    /// `autoplay`, becomes the default.
    pub fn add_animation(&mut self, animation: Animation) {
        let name = animation.name.clone();
        let promote = self.default_animation.is_none() || animation.autoplay;
        if self.animations.insert(name.clone(), animation).is_some() {
            debug!("animation '{}' replaced", name);
        }
        if promote {
            self.default_animation = Some(name);
        }
    }

    pub fn remove_animation(&mut self, name: &str) -> Option<Animation> {
        // shift_remove keeps the remaining entries in insertion order
        let removed = self.animations.shift_remove(name)?;
        if self.default_animation.as_deref() == Some(name) {
            self.default_animation = self.animations.keys().next().cloned();
        }
        Some(removed)
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Animation> {
        self.animations.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.animations.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Animation)> {
        self.animations.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn clear(&mut self) {
        self.animations.clear();
        self.default_animation = None;
    }

    pub fn default_animation(&self) -> Option<&str> {
        self.default_animation.as_deref()
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), AnimationError> {
        if !self.contains(name) {
            return Err(AnimationError::not_found(name));
        }
        self.default_animation = Some(name.to_string());
        Ok(())
    }

    /// Insert under an explicit key without touching the default. Used by
    /// decoding, which restores the persisted default afterwards.
    pub(crate) fn insert_raw(&mut self, key: String, animation: Animation) {
        self.animations.insert(key, animation);
    }

    pub(crate) fn restore_default(&mut self, name: Option<String>) {
        self.default_animation = match name {
            Some(name) if self.contains(&name) => Some(name),
            _ => self.animations.keys().next().cloned(),
        };
    }
}
