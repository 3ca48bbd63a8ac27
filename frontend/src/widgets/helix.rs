use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::dom;

const UNIT_TEMPLATE: &str = r#"
    <div class="vertical-line"></div>
    <div class="circle top"></div>
    <div class="circle bottom"></div>
"#;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HelixOptions {
    pub container_id: String,
    pub repetitions: usize,
    /// Stagger between neighbouring units.
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Default for HelixOptions {
    fn default() -> Self {
        Self {
            container_id: "animation-helix".to_string(),
            repetitions: 16,
            delay_ms: 200,
            duration_ms: 3000,
        }
    }
}

/// CSS `animation` values for the three parts of one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitAnimations {
    pub line: String,
    pub top: String,
    pub bottom: String,
}

/// Negative start offset in seconds, so every unit is already mid-cycle on
/// first paint and the last unit starts at 0.
pub fn stagger_secs(options: &HelixOptions, index: usize) -> f64 {
    let delay = f64::from(options.delay_ms) / 1000.0;
    let last = options.repetitions.saturating_sub(1) as f64;
    -last * delay + index as f64 * delay
}

pub fn unit_animations(options: &HelixOptions, index: usize) -> UnitAnimations {
    let duration = f64::from(options.duration_ms);
    let delay = stagger_secs(options, index);
    UnitAnimations {
        line: format!(
            "helix-scaleLine {}ms ease-in infinite {}s alternate",
            duration / 4.0,
            delay
        ),
        top: format!("helix-moveTop {}ms ease-in-out infinite {}s", duration, delay),
        bottom: format!("helix-moveBottom {}ms ease-in-out infinite {}s", duration, delay),
    }
}

/// Fills the helix container with staggered units. Returns how many were
/// added; zero when the container is not on the page.
pub fn build(options: &HelixOptions) -> Result<usize, JsValue> {
    let (Some(container), Some(document)) = (dom::by_id(&options.container_id), dom::document()) else {
        return Ok(0);
    };

    for index in 0..options.repetitions {
        let unit = document.create_element("div")?;
        unit.set_class_name("helix-container");
        unit.set_inner_html(UNIT_TEMPLATE);

        let animations = unit_animations(options, index);
        for (selector, animation) in [
            (".vertical-line", &animations.line),
            (".top", &animations.top),
            (".bottom", &animations.bottom),
        ] {
            if let Some(part) = dom::query_within(&unit, selector) {
                dom::set_style(&part, "animation", animation);
            }
        }
        container.append_child(&unit)?;
    }
    Ok(options.repetitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_unit_starts_furthest_back() {
        let options = HelixOptions::default();
        assert!((stagger_secs(&options, 0) + 3.0).abs() < 1e-9);
        assert!((stagger_secs(&options, 1) + 2.8).abs() < 1e-9);
        assert!(stagger_secs(&options, 15).abs() < 1e-9);
    }

    #[test]
    fn line_runs_at_quarter_duration() {
        let options = HelixOptions::default();
        let animations = unit_animations(&options, 15);
        assert_eq!(animations.line, "helix-scaleLine 750ms ease-in infinite 0s alternate");
        assert_eq!(animations.top, "helix-moveTop 3000ms ease-in-out infinite 0s");
        assert_eq!(animations.bottom, "helix-moveBottom 3000ms ease-in-out infinite 0s");
    }

    #[test]
    fn single_unit_has_no_stagger() {
        let options = HelixOptions {
            repetitions: 1,
            ..HelixOptions::default()
        };
        assert_eq!(stagger_secs(&options, 0), 0.0);
    }
}
