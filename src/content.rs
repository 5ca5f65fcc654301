//! Static page copy.

pub const EVENT_NAME: &str = "HOLOEXPO 2026";
pub const TAGLINE: &str = "Where hardware, AI and the open web meet.";

/// A feature card. `marker` picks the hover icon shape, if any.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub marker: Option<&'static str>,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        id: "feature-keynotes",
        title: "Keynotes",
        blurb: "Three days of talks from the people shipping the next platforms.",
        marker: Some("cube"),
    },
    Feature {
        id: "feature-labs",
        title: "Hands-on Labs",
        blurb: "Bring a laptop. Leave with a working prototype.",
        marker: Some("torus"),
    },
    Feature {
        id: "feature-arena",
        title: "Startup Arena",
        blurb: "Live pitches judged by founders and investors.",
        marker: Some("cone"),
    },
    Feature {
        id: "feature-network",
        title: "Networking",
        blurb: "Curated meetups, hallway tracks and an after-party.",
        marker: Some("sphere"),
    },
];

/// Anchor ids and markers in page order.
pub fn anchors() -> impl Iterator<Item = (&'static str, Option<&'static str>)> {
    FEATURES.iter().map(|feature| (feature.id, feature.marker))
}
