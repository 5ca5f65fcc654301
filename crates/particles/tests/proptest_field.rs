//! Property-based tests for the particle field
//!
//! Validates field invariants:
//! - Opacity stays inside the configured band
//! - Horizontal position stays inside [0, width)
//! - Pointer repulsion never produces NaN or infinity
//! - Particle count matches the viewport area

use glam::Vec2;
use holoexpo_core::Viewport;
use holoexpo_particles::{target_count, ParticleConfig, ParticleField};
use holoexpo_testkit::RecordingSurface;
use proptest::prelude::*;

fn pointer_strategy() -> impl Strategy<Value = Option<Vec2>> {
    prop_oneof![
        Just(None),
        (-200.0f32..2200.0, -200.0f32..1400.0).prop_map(|(x, y)| Some(Vec2::new(x, y))),
    ]
}

proptest! {
    /// Property: opacity and x stay in range for any pointer path.
    #[test]
    fn particles_stay_in_bounds(
        seed in any::<u64>(),
        width in 1.0f32..2000.0,
        height in 1.0f32..1200.0,
        pointers in prop::collection::vec(pointer_strategy(), 1..120),
    ) {
        let config = ParticleConfig { seed, ..Default::default() };
        let low = config.base_opacity;
        let high = config.max_opacity();
        let mut field = ParticleField::new(config);
        field.init(Viewport::new(width, height));
        let mut surface = RecordingSurface::new();

        for pointer in pointers {
            surface.reset();
            field.tick(pointer, &mut surface);
            for p in field.particles() {
                prop_assert!(p.opacity >= low && p.opacity <= high,
                    "opacity {} outside [{}, {}]", p.opacity, low, high);
                prop_assert!(p.position.x >= 0.0 && p.position.x < width,
                    "x {} outside [0, {})", p.position.x, width);
                prop_assert!(p.position.is_finite());
            }
        }
    }

    /// Property: a pointer exactly on top of every particle stays finite.
    #[test]
    fn coincident_pointer_is_finite(seed in any::<u64>()) {
        let config = ParticleConfig { seed, ..Default::default() };
        let mut field = ParticleField::new(config);
        field.init(Viewport::new(800.0, 600.0));

        for index in 0..5 {
            // Where this particle lands before repulsion is applied.
            let p = field.particles()[index];
            let stats = field.step(Some(p.position + p.velocity));
            prop_assert!(stats.repelled >= 1);
            for p in field.particles() {
                prop_assert!(p.position.is_finite());
                prop_assert!(p.velocity.is_finite());
            }
        }
    }

    /// Property: count is min(cap, floor(area / per-particle area)).
    #[test]
    fn count_matches_area(width in 0.0f32..3000.0, height in 0.0f32..2000.0) {
        let config = ParticleConfig::default();
        let expected = ((width * height / 15_000.0).floor() as usize).min(100);
        let viewport = Viewport::new(width, height);
        prop_assert_eq!(target_count(viewport, &config), expected);

        let mut field = ParticleField::new(config);
        field.init(viewport);
        prop_assert_eq!(field.len(), expected);
    }
}
