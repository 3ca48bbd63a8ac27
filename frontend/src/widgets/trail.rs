use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlImageElement, MouseEvent};

use crate::dom;
use crate::utils::Throttle;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrailOptions {
    pub container: String,
    pub images: Vec<String>,
    /// Number of pooled image elements.
    pub count: usize,
    /// Minimum time between two repositioned images.
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Default for TrailOptions {
    fn default() -> Self {
        Self {
            container: ".stickers-container".to_string(),
            images: Vec::new(),
            count: 5,
            delay_ms: 80,
            duration_ms: 800,
        }
    }
}

/// Round-robin cursor over a fixed set of slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrailPool {
    next: usize,
    size: usize,
}

impl TrailPool {
    pub fn new(size: usize) -> Option<Self> {
        (size > 0).then_some(Self { next: 0, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn next_slot(&mut self) -> usize {
        let slot = self.next;
        self.next = (self.next + 1) % self.size;
        slot
    }
}

pub fn image_for_slot(images: &[String], slot: usize) -> Option<&str> {
    if images.is_empty() {
        return None;
    }
    Some(images[slot % images.len()].as_str())
}

struct Inner {
    container: HtmlElement,
    slots: Vec<HtmlImageElement>,
    pool: RefCell<TrailPool>,
    throttle: RefCell<Throttle>,
}

impl Inner {
    fn pointer_moved(&self, event: &MouseEvent) {
        if !self.throttle.borrow_mut().try_acquire(event.time_stamp()) {
            return;
        }
        let rect = self.container.get_bounding_client_rect();
        let x = f64::from(event.client_x()) - rect.left();
        let y = f64::from(event.client_y()) - rect.top();
        self.place(x, y);
    }

    fn place(&self, x: f64, y: f64) {
        let slot = self.pool.borrow_mut().next_slot();
        let image = &self.slots[slot];

        dom::remove_class(image, "animate");
        // reading layout restarts the css animation
        let _ = image.offset_height();
        dom::set_style(image, "left", &dom::px(x));
        dom::set_style(image, "top", &dom::px(y));
        dom::add_class(image, "animate");
    }
}

/// Trail of sticker images following the pointer over a container.
pub struct TrailEffect {
    _inner: Rc<Inner>,
    _listener: EventListener,
}

impl TrailEffect {
    pub fn bind(options: &TrailOptions) -> Option<Self> {
        if options.images.is_empty() {
            return None;
        }
        let container = dom::query(&options.container)?;
        let pool = TrailPool::new(options.count)?;
        let document = dom::document()?;

        let slots = (0..pool.size())
            .map(|slot| -> Result<HtmlImageElement, JsValue> {
                let image: HtmlImageElement = document.create_element("img")?.dyn_into()?;
                image.set_src(image_for_slot(&options.images, slot).unwrap_or_default());
                image.set_class_name("trail-image");
                image.set_attribute("aria-hidden", "true")?;
                image.set_attribute("role", "presentation")?;
                container.append_child(&image)?;
                Ok(image)
            })
            .collect::<Result<Vec<_>, JsValue>>()
            .ok()?;
        dom::set_style(
            &container,
            "--trail-duration",
            &format!("{}ms", options.duration_ms),
        );

        let inner = Rc::new(Inner {
            container,
            slots,
            pool: RefCell::new(pool),
            throttle: RefCell::new(Throttle::new(options.delay_ms)),
        });
        let on_move = Rc::clone(&inner);
        let listener = EventListener::new(&inner.container, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_move.pointer_moved(event);
            }
        });

        Some(Self {
            _inner: inner,
            _listener: listener,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_is_rejected() {
        assert_eq!(TrailPool::new(0), None);
    }

    #[test]
    fn kth_move_reuses_slot_k_mod_n() {
        let mut pool = TrailPool::new(4).unwrap();
        for k in 0..23 {
            assert_eq!(pool.next_slot(), k % 4);
        }
    }

    #[test]
    fn images_cycle_over_slots() {
        let images = vec!["a.svg".to_string(), "b.svg".to_string(), "c.svg".to_string()];
        let assigned = (0..5)
            .map(|slot| image_for_slot(&images, slot).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(assigned, vec!["a.svg", "b.svg", "c.svg", "a.svg", "b.svg"]);
        assert_eq!(image_for_slot(&[], 0), None);
    }

    #[test]
    fn options_default_to_class_values() {
        let options: TrailOptions = serde_json::from_str(r#"{ "images": ["x.svg"] }"#).unwrap();
        assert_eq!(options.count, 5);
        assert_eq!(options.delay_ms, 80);
        assert_eq!(options.duration_ms, 800);
        assert_eq!(options.container, ".stickers-container");
    }
}
