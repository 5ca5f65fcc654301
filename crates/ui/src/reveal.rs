//! Staggered intro reveal for the glass panels.

use holoexpo_tween::{Easing, Tween};

/// Starting downward offset in logical pixels.
pub const REVEAL_OFFSET: f32 = 50.0;
/// Per-panel duration in seconds.
pub const REVEAL_DURATION: f32 = 1.0;
/// Delay between consecutive panels in seconds.
pub const REVEAL_STAGGER: f32 = 0.2;

/// Offset and opacity of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelReveal {
    /// Vertical offset from the resting position.
    pub offset_y: f32,
    /// Panel opacity.
    pub opacity: f32,
}

/// Reveal animation for `count` panels starting at `start`.
#[derive(Debug, Clone)]
pub struct IntroReveal {
    offsets: Vec<Tween>,
    opacities: Vec<Tween>,
}

impl IntroReveal {
    /// Schedule `count` panels, each [`REVEAL_STAGGER`] after the previous.
    pub fn new(count: usize, start: f32) -> Self {
        let begin = |index: usize| start + index as f32 * REVEAL_STAGGER;
        Self {
            offsets: (0..count)
                .map(|i| Tween::new(REVEAL_OFFSET, 0.0, begin(i), REVEAL_DURATION, Easing::Power3Out))
                .collect(),
            opacities: (0..count)
                .map(|i| Tween::new(0.0, 1.0, begin(i), REVEAL_DURATION, Easing::Power3Out))
                .collect(),
        }
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether there are no panels.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// State of panel `index` at `now`. Unknown panels rest in place.
    pub fn panel(&self, index: usize, now: f32) -> PanelReveal {
        match (self.offsets.get(index), self.opacities.get(index)) {
            (Some(offset), Some(opacity)) => PanelReveal {
                offset_y: offset.value_at(now),
                opacity: opacity.value_at(now),
            },
            _ => PanelReveal {
                offset_y: 0.0,
                opacity: 1.0,
            },
        }
    }

    /// Whether every panel has come to rest.
    pub fn is_finished(&self, now: f32) -> bool {
        self.offsets.iter().all(|tween| tween.is_finished(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_start_hidden_and_low() {
        let reveal = IntroReveal::new(3, 0.0);
        let first = reveal.panel(0, 0.0);
        assert_eq!(first.offset_y, REVEAL_OFFSET);
        assert_eq!(first.opacity, 0.0);
    }

    #[test]
    fn stagger_delays_later_panels() {
        let reveal = IntroReveal::new(3, 0.0);
        assert!(reveal.panel(0, 0.2).opacity > 0.0);
        assert_eq!(reveal.panel(1, 0.2).opacity, 0.0);
        assert_eq!(reveal.panel(2, 0.39).opacity, 0.0);
    }

    #[test]
    fn panels_rest_exactly_at_end() {
        let reveal = IntroReveal::new(3, 1.0);
        assert!(!reveal.is_finished(2.3));
        assert!(reveal.is_finished(2.5));
        for i in 0..3 {
            assert_eq!(
                reveal.panel(i, 2.5),
                PanelReveal {
                    offset_y: 0.0,
                    opacity: 1.0
                }
            );
        }
    }

    #[test]
    fn out_of_range_panel_is_at_rest() {
        let reveal = IntroReveal::new(0, 0.0);
        assert!(reveal.is_empty());
        assert_eq!(reveal.panel(4, 0.0).opacity, 1.0);
    }
}
