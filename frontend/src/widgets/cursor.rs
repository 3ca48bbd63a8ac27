use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::dom;
use crate::utils::animation_loop;

/// Share of the remaining distance covered per frame.
pub const FOLLOW_FACTOR: f64 = 0.125;

/// A custom cursor element and the elements whose hover shows it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CursorBinding {
    pub cursor: String,
    pub triggers: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorVisibility {
    Hidden,
    Active,
    /// Fade-out running; the element is hidden once it ends.
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorMotion {
    current: (f64, f64),
    target: (f64, f64),
    visibility: CursorVisibility,
}

impl Default for CursorMotion {
    fn default() -> Self {
        Self {
            current: (0.0, 0.0),
            target: (0.0, 0.0),
            visibility: CursorVisibility::Hidden,
        }
    }
}

impl CursorMotion {
    pub fn point_at(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    pub fn enter(&mut self) {
        self.visibility = CursorVisibility::Active;
    }

    pub fn leave(&mut self) {
        self.visibility = CursorVisibility::Leaving;
    }

    pub fn is_hovering(&self) -> bool {
        self.visibility == CursorVisibility::Active
    }

    #[cfg(test)]
    pub fn visibility(&self) -> CursorVisibility {
        self.visibility
    }

    #[cfg(test)]
    pub fn position(&self) -> (f64, f64) {
        self.current
    }

    /// The fade-out finished. Returns true when the element should be hidden,
    /// which is only the case if no trigger was entered meanwhile.
    pub fn animation_finished(&mut self) -> bool {
        if self.visibility == CursorVisibility::Leaving {
            self.visibility = CursorVisibility::Hidden;
            true
        } else {
            false
        }
    }

    /// Advances one frame. Only moves while hovering.
    pub fn frame(&mut self) -> Option<(f64, f64)> {
        if !self.is_hovering() {
            return None;
        }
        let (x, y) = self.current;
        let (tx, ty) = self.target;
        self.current = (x + (tx - x) * FOLLOW_FACTOR, y + (ty - y) * FOLLOW_FACTOR);
        Some(self.current)
    }
}

struct Inner {
    element: HtmlElement,
    motion: RefCell<CursorMotion>,
}

impl Inner {
    fn enter(&self) {
        self.motion.borrow_mut().enter();
        dom::remove_class(&self.element, "leaving");
        dom::add_class(&self.element, "active");
        dom::set_style(&self.element, "display", "block");
        dom::set_style(&self.element, "opacity", "1");
    }

    fn leave(&self) {
        self.motion.borrow_mut().leave();
        dom::remove_class(&self.element, "active");
        dom::add_class(&self.element, "leaving");
    }

    fn animation_ended(&self) {
        if self.motion.borrow_mut().animation_finished() {
            dom::set_style(&self.element, "display", "none");
            dom::remove_class(&self.element, "leaving");
        }
    }

    fn pointer_moved(&self, event: &MouseEvent) {
        let x = f64::from(event.client_x());
        let y = f64::from(event.client_y());
        self.motion.borrow_mut().point_at(x, y);
        dom::set_style(&self.element, "--mouse-x", &dom::px(x));
        dom::set_style(&self.element, "--mouse-y", &dom::px(y));
    }

    fn frame(&self) {
        let moved = self.motion.borrow_mut().frame();
        if let Some((x, y)) = moved {
            dom::set_style(
                &self.element,
                "transform",
                &format!("translate({}px, {}px)", x, y),
            );
        }
    }
}

/// Custom cursor that eases toward the pointer while a trigger is hovered.
pub struct CustomCursor {
    _inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl CustomCursor {
    pub fn bind(binding: &CursorBinding) -> Option<Self> {
        let element = dom::query(&binding.cursor)?;
        let triggers = dom::query_all(&binding.triggers);
        if triggers.is_empty() {
            return None;
        }
        let document = dom::document()?;

        let inner = Rc::new(Inner {
            element,
            motion: RefCell::new(CursorMotion::default()),
        });
        let mut listeners = Vec::with_capacity(triggers.len() * 2 + 2);

        {
            let inner = Rc::clone(&inner);
            listeners.push(EventListener::new(&document, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    inner.pointer_moved(event);
                }
            }));
        }
        {
            let element = inner.element.clone();
            let inner = Rc::clone(&inner);
            listeners.push(EventListener::new(&element, "animationend", move |_| {
                inner.animation_ended();
            }));
        }
        for trigger in &triggers {
            let on_enter = Rc::clone(&inner);
            listeners.push(EventListener::new(trigger, "mouseenter", move |_| on_enter.enter()));
            let on_leave = Rc::clone(&inner);
            listeners.push(EventListener::new(trigger, "mouseleave", move |_| on_leave.leave()));
        }

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        animation_loop(move |_| match weak.upgrade() {
            Some(inner) => {
                inner.frame();
                true
            }
            None => false,
        });

        Some(Self {
            _inner: inner,
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    #[test]
    fn stays_put_while_not_hovering() {
        let mut motion = CursorMotion::default();
        motion.point_at(400.0, 300.0);
        assert_eq!(motion.frame(), None);
        assert_eq!(motion.position(), (0.0, 0.0));
    }

    #[test]
    fn moves_an_eighth_of_the_way_per_frame() {
        let mut motion = CursorMotion::default();
        motion.enter();
        motion.point_at(800.0, -160.0);
        assert_eq!(motion.frame(), Some((100.0, -20.0)));
        assert_eq!(motion.frame(), Some((187.5, -37.5)));
    }

    #[test]
    fn converges_geometrically_toward_pointer() {
        let mut motion = CursorMotion::default();
        motion.enter();
        let target = (640.0, 480.0);
        motion.point_at(target.0, target.1);
        let start = distance(motion.position(), target);

        for frame in 1..=60 {
            motion.frame();
            let expected = start * (7.0f64 / 8.0).powi(frame);
            assert!((distance(motion.position(), target) - expected).abs() < 1e-6);
        }
        assert!(distance(motion.position(), target) < 0.5);
    }

    #[test]
    fn leaving_freezes_position() {
        let mut motion = CursorMotion::default();
        motion.enter();
        motion.point_at(80.0, 80.0);
        motion.frame();
        motion.leave();
        let frozen = motion.position();
        motion.point_at(500.0, 500.0);
        assert_eq!(motion.frame(), None);
        assert_eq!(motion.position(), frozen);
    }

    #[test]
    fn hides_after_fade_out() {
        let mut motion = CursorMotion::default();
        motion.enter();
        motion.leave();
        assert_eq!(motion.visibility(), CursorVisibility::Leaving);
        assert!(motion.animation_finished());
        assert_eq!(motion.visibility(), CursorVisibility::Hidden);
    }

    #[test]
    fn reentering_during_fade_out_keeps_cursor_visible() {
        let mut motion = CursorMotion::default();
        motion.enter();
        motion.leave();
        motion.enter();
        assert!(!motion.animation_finished());
        assert_eq!(motion.visibility(), CursorVisibility::Active);
        assert!(motion.is_hovering());
    }
}
