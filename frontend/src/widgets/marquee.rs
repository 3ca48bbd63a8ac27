use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use serde::Deserialize;
use web_sys::HtmlElement;

use crate::dom;
use crate::utils::animation_loop;

/// Below this difference the current speed snaps to the target.
const SPEED_EPSILON: f64 = 0.001;
const INTRO_CLASS: &str = "intro-animation";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarqueeOptions {
    pub container: String,
    pub track: String,
    pub item: String,
    /// Pixels per frame.
    pub normal_speed: f64,
    pub hover_speed: f64,
    /// Share of the remaining speed difference closed per frame.
    pub speed_smoothing: f64,
    pub intro_duration_ms: f64,
    /// Copies of the item set appended after the originals.
    pub duplicates: usize,
    /// Right margins the leading items start the intro with.
    pub intro_margins: Vec<f64>,
    /// How many leading items take part in the intro margin animation.
    pub intro_items: usize,
    pub standard_margin: f64,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            container: ".header-marquee-container".to_string(),
            track: ".header-marquee-track".to_string(),
            item: ".header-marquee-item".to_string(),
            normal_speed: 1.0,
            hover_speed: 0.1,
            speed_smoothing: 0.08,
            intro_duration_ms: 1400.0,
            duplicates: 4,
            intro_margins: vec![320.0, 160.0, 80.0],
            intro_items: 8,
            standard_margin: 6.0,
        }
    }
}

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Horizontal extent of one item: its box plus both margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemExtent {
    pub width: f64,
    pub margin_left: f64,
    pub margin_right: f64,
}

/// Width of one un-duplicated item set: the sum of every original item's
/// extent, so items of different or fractional widths wrap exactly.
pub fn single_set_width<I>(originals: I) -> f64
where
    I: IntoIterator<Item = ItemExtent>,
{
    originals
        .into_iter()
        .map(|item| item.width + item.margin_left + item.margin_right)
        .sum()
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntroFrame {
    pub offset: f64,
    pub margins: Vec<f64>,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Intro { started_at: Option<f64> },
    Looping,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeMotion {
    options: MarqueeOptions,
    phase: Phase,
    position: f64,
    current_speed: f64,
    target_speed: f64,
}

impl MarqueeMotion {
    pub fn new(options: MarqueeOptions) -> Self {
        let speed = options.normal_speed;
        Self {
            options,
            phase: Phase::Intro { started_at: None },
            position: 0.0,
            current_speed: speed,
            target_speed: speed,
        }
    }

    pub fn is_intro_playing(&self) -> bool {
        matches!(self.phase, Phase::Intro { .. })
    }

    #[cfg(test)]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn current_speed(&self) -> f64 {
        self.current_speed
    }

    fn intro_margin(&self, index: usize, eased: f64) -> f64 {
        let standard = self.options.standard_margin;
        let start = self.options.intro_margins.get(index).copied().unwrap_or(standard);
        start - (start - standard) * eased
    }

    /// One frame of the entrance: the track slides in from `viewport_width`
    /// while the leading items' margins shrink back to standard. The first
    /// call fixes the start time; the frame at or past the duration finishes
    /// the intro and switches to looping from position 0.
    pub fn intro_frame(&mut self, timestamp: f64, viewport_width: f64, item_count: usize) -> IntroFrame {
        let started_at = match &mut self.phase {
            Phase::Intro { started_at } => *started_at.get_or_insert(timestamp),
            Phase::Looping => {
                return IntroFrame {
                    offset: self.position,
                    margins: Vec::new(),
                    finished: true,
                }
            }
        };

        let duration = self.options.intro_duration_ms;
        let progress = if duration > 0.0 {
            ((timestamp - started_at) / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = ease_out_quad(progress);
        let offset = viewport_width - viewport_width * eased;
        let margins = (0..item_count.min(self.options.intro_items))
            .map(|index| self.intro_margin(index, eased))
            .collect();

        let finished = progress >= 1.0;
        if finished {
            self.phase = Phase::Looping;
            self.position = 0.0;
        }
        IntroFrame {
            offset,
            margins,
            finished,
        }
    }

    /// Hover changes the target speed; ignored until the intro is done.
    pub fn set_hovering(&mut self, hovering: bool) {
        if self.is_intro_playing() {
            return;
        }
        self.target_speed = if hovering {
            self.options.hover_speed
        } else {
            self.options.normal_speed
        };
    }

    /// One frame of the endless scroll. Returns the new track offset, which
    /// stays within `(-set_width, 0]`.
    pub fn loop_frame(&mut self, set_width: f64) -> f64 {
        if self.current_speed != self.target_speed {
            self.current_speed += (self.target_speed - self.current_speed) * self.options.speed_smoothing;
            if (self.current_speed - self.target_speed).abs() < SPEED_EPSILON {
                self.current_speed = self.target_speed;
            }
        }

        self.position -= self.current_speed;
        if set_width > 0.0 && self.position.abs() >= set_width {
            self.position = 0.0;
        }
        self.position
    }
}

struct Inner {
    track: HtmlElement,
    items: Vec<HtmlElement>,
    original_count: usize,
    standard_margin: f64,
    motion: RefCell<MarqueeMotion>,
}

impl Inner {
    fn translate(&self, offset: f64) {
        dom::set_style(&self.track, "transform", &format!("translateX({}px)", offset));
    }

    /// Returns false once the intro is over.
    fn intro_step(&self, timestamp: f64) -> bool {
        let frame = self
            .motion
            .borrow_mut()
            .intro_frame(timestamp, dom::viewport_width(), self.items.len());

        let standard = dom::px(self.standard_margin);
        for (item, margin) in self.items.iter().zip(&frame.margins) {
            dom::set_style(item, "margin-right", &dom::px(*margin));
            dom::set_style(item, "margin-left", &standard);
        }
        self.translate(frame.offset);

        if frame.finished {
            let margin = format!("0 {}", standard);
            for item in self.items.iter().take(frame.margins.len()) {
                dom::set_style(item, "margin", &margin);
            }
            dom::remove_class(&self.track, INTRO_CLASS);
        }
        !frame.finished
    }

    fn set_width(&self) -> f64 {
        single_set_width(self.items.iter().take(self.original_count).map(|item| ItemExtent {
            width: item.get_bounding_client_rect().width(),
            margin_left: dom::computed_px(item, "margin-left"),
            margin_right: dom::computed_px(item, "margin-right"),
        }))
    }

    fn loop_step(&self) {
        let width = self.set_width();
        let offset = self.motion.borrow_mut().loop_frame(width);
        self.translate(offset);
    }
}

/// Header strip of images that slides in once, then scrolls endlessly and
/// slows down while hovered.
pub struct Marquee {
    _inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl Marquee {
    pub fn bind(options: &MarqueeOptions) -> Option<Self> {
        let container = dom::query(&options.container)?;
        let track = dom::query(&options.track)?;
        let originals = dom::query_all_within(&track, &options.item);
        if originals.is_empty() {
            return None;
        }

        dom::add_class(&track, INTRO_CLASS);
        for _ in 0..options.duplicates {
            for item in &originals {
                if let Ok(clone) = item.clone_node_with_deep(true) {
                    let _ = track.append_child(&clone);
                }
            }
        }
        dom::set_style(&track, "opacity", "1");
        let items = dom::query_all_within(&track, &options.item);

        let inner = Rc::new(Inner {
            track,
            items,
            original_count: originals.len(),
            standard_margin: options.standard_margin,
            motion: RefCell::new(MarqueeMotion::new(options.clone())),
        });

        let on_enter = Rc::clone(&inner);
        let on_leave = Rc::clone(&inner);
        let listeners = vec![
            EventListener::new(&container, "mouseenter", move |_| {
                on_enter.motion.borrow_mut().set_hovering(true)
            }),
            EventListener::new(&container, "mouseleave", move |_| {
                on_leave.motion.borrow_mut().set_hovering(false)
            }),
        ];

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        animation_loop(move |timestamp| {
            let Some(inner) = weak.upgrade() else {
                return false;
            };
            if inner.intro_step(timestamp) {
                return true;
            }
            let weak = Rc::downgrade(&inner);
            animation_loop(move |_| match weak.upgrade() {
                Some(inner) => {
                    inner.loop_step();
                    true
                }
                None => false,
            });
            false
        });

        Some(Self {
            _inner: inner,
            _listeners: listeners,
        })
    }
}
