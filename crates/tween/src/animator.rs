//! Keyed tween ownership.

use std::collections::HashMap;
use std::hash::Hash;

use crate::{Easing, Tween};

#[derive(Debug, Clone, Copy)]
enum Slot {
    Settled(f32),
    Running(Tween),
}

impl Slot {
    fn sample(&self, now: f32) -> f32 {
        match self {
            Slot::Settled(value) => *value,
            Slot::Running(tween) => tween.value_at(now),
        }
    }
}

/// Owns one animated scalar per key.
///
/// Retargeting a key samples its in-flight value and starts a fresh tween
/// from there, replacing whatever was running.
#[derive(Debug, Clone)]
pub struct Animator<K> {
    slots: HashMap<K, Slot>,
}

impl<K> Default for Animator<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Copy> Animator<K> {
    /// Create an empty animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key's value immediately, cancelling any running tween.
    pub fn set(&mut self, key: K, value: f32) {
        self.slots.insert(key, Slot::Settled(value));
    }

    /// Start a transition of `key` towards `target`.
    ///
    /// Keys that were never set start from `target` and stay there.
    pub fn animate_to(&mut self, key: K, target: f32, duration: f32, easing: Easing, now: f32) {
        let from = self
            .slots
            .get(&key)
            .map(|slot| slot.sample(now))
            .unwrap_or(target);
        let tween = Tween::new(from, target, now, duration, easing);
        self.slots.insert(key, Slot::Running(tween));
    }

    /// Current value of `key` at `now`, if the key is known.
    pub fn value(&self, key: K, now: f32) -> Option<f32> {
        self.slots.get(&key).map(|slot| slot.sample(now))
    }

    /// Current value of `key`, or `default` for unknown keys.
    pub fn value_or(&self, key: K, now: f32, default: f32) -> f32 {
        self.value(key, now).unwrap_or(default)
    }

    /// The target `key` is heading for.
    pub fn target(&self, key: K) -> Option<f32> {
        self.slots.get(&key).map(|slot| match slot {
            Slot::Settled(value) => *value,
            Slot::Running(tween) => tween.to,
        })
    }

    /// Whether `key` has a tween that has not finished at `now`.
    pub fn is_animating(&self, key: K, now: f32) -> bool {
        matches!(self.slots.get(&key), Some(Slot::Running(tween)) if !tween.is_finished(now))
    }

    /// Replace finished tweens with their settled end values.
    pub fn advance(&mut self, now: f32) {
        for slot in self.slots.values_mut() {
            if let Slot::Running(tween) = slot {
                if tween.is_finished(now) {
                    *slot = Slot::Settled(tween.to);
                }
            }
        }
    }

    /// Number of keys currently running a tween.
    pub fn running(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot, Slot::Running(_)))
            .count()
    }
}
