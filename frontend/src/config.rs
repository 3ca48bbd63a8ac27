use log::{warn, Level};
use serde::Deserialize;

use crate::dom;
use crate::widgets::cursor::CursorBinding;
use crate::widgets::helix::HelixOptions;
use crate::widgets::marquee::MarqueeOptions;
use crate::widgets::testimonials::DEFAULT_INTERVAL_MS;
use crate::widgets::trail::TrailOptions;

/// Id of the optional `<script type="application/json">` block overriding defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub email: String,
    pub cursors: Vec<CursorBinding>,
    pub testimonial_interval_ms: u32,
    pub trail: TrailOptions,
    pub marquee: MarqueeOptions,
    pub helix: HelixOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            email: "hello@adriengervaix.com".to_string(),
            cursors: vec![
                CursorBinding {
                    cursor: ".cursor-animation-flame".to_string(),
                    triggers: ".flask-container".to_string(),
                },
                CursorBinding {
                    cursor: ".cursor-animation-eye".to_string(),
                    triggers: ".project-item".to_string(),
                },
            ],
            testimonial_interval_ms: DEFAULT_INTERVAL_MS,
            trail: TrailOptions {
                images: [
                    "stickers_triangle.svg",
                    "stickers_glass.svg",
                    "stickers_dna.svg",
                    "stickers_globe.svg",
                ]
                .iter()
                .map(|name| format!("assets/footer/{}", name))
                .collect(),
                count: 4,
                delay_ms: 100,
                duration_ms: 2000,
                ..TrailOptions::default()
            },
            marquee: MarqueeOptions::default(),
            helix: HelixOptions::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults, overridden by the page's config block when it has one.
    pub fn load() -> Self {
        let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
            return Self::default();
        };
        Self::from_json(&raw).unwrap_or_else(|err| {
            warn!("Ignoring malformed site config: {}", err);
            Self::default()
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn defaults_match_page_setup() {
        let config = SiteConfig::default();
        assert_eq!(config.testimonial_interval_ms, 6400);
        assert_eq!(config.cursors.len(), 2);
        assert_eq!(config.trail.count, 4);
        assert_eq!(config.trail.images[2], "assets/footer/stickers_dna.svg");
        assert_eq!(config.marquee.duplicates, 4);
    }

    #[test]
    fn partial_override_keeps_other_fields() {
        let config = SiteConfig::from_json(
            r#"{ "email": "me@example.com", "marquee": { "hover_speed": 0.25 } }"#,
        )
        .unwrap();
        assert_eq!(config.email, "me@example.com");
        assert_eq!(config.marquee.hover_speed, 0.25);
        assert_eq!(config.marquee.normal_speed, 1.0);
        assert_eq!(config.helix, HelixOptions::default());
    }

    #[test]
    fn cursor_bindings_need_both_selectors() {
        let err = SiteConfig::from_json(r#"{ "cursors": [{ "cursor": ".c" }] }"#);
        assert!(err.is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ email: ").is_err());
    }
}
