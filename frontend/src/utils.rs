use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use log::error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Writes `text` through `navigator.clipboard.writeText`.
///
/// The clipboard object is looked up dynamically so pages served over plain
/// http (where the API is missing) get an `Err` instead of a panic.
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard API unavailable"));
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: Promise = write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Copies `text` in the background and runs `on_copied` once it landed.
/// A rejected write is only logged.
pub fn copy_then<F>(text: String, on_copied: F)
where
    F: FnOnce() + 'static,
{
    spawn_local(async move {
        match copy_to_clipboard(&text).await {
            Ok(()) => on_copied(),
            Err(err) => error!("Failed to copy: {:?}", err),
        }
    });
}

/// Runs the latest scheduled function once calls stop for `wait_ms`.
///
/// Scheduling replaces (and thereby clears) the pending timeout, so it also
/// serves as a single-slot timer that never stacks.
pub struct Debouncer {
    wait_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.wait_ms, f);
        // dropping the previous handle clears it
        self.pending.borrow_mut().replace(timeout);
    }
}

/// Lets at most one call through per `interval_ms`; calls in between are dropped.
///
/// Feed it a monotonic clock such as `Event::time_stamp`. A timestamp earlier
/// than the last accepted one restarts the window instead of blocking.
#[derive(Clone, Debug, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last: None,
        }
    }

    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if (0.0..self.interval_ms).contains(&(now_ms - last)) => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}

struct FrameLoop {
    step: RefCell<Box<dyn FnMut(f64) -> bool>>,
    frame: RefCell<Option<AnimationFrame>>,
}

/// Calls `step` with the frame timestamp on every animation frame until it
/// returns `false`.
pub fn animation_loop<F>(step: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    let state = Rc::new(FrameLoop {
        step: RefCell::new(Box::new(step)),
        frame: RefCell::new(None),
    });
    schedule_frame(state);
}

fn schedule_frame(state: Rc<FrameLoop>) {
    let next = Rc::clone(&state);
    let frame = request_animation_frame(move |timestamp| {
        let keep_going = {
            let mut step = next.step.borrow_mut();
            (*step)(timestamp)
        };
        if keep_going {
            schedule_frame(Rc::clone(&next));
        } else {
            next.frame.borrow_mut().take();
        }
    });
    *state.frame.borrow_mut() = Some(frame);
}

/// Parses a computed CSS length such as `"6px"`; anything else reads as 0.
pub fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_accepts_first_call() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.try_acquire(5_000.0));
    }

    #[test]
    fn throttle_drops_calls_inside_interval() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.try_acquire(0.0));
        assert!(!throttle.try_acquire(40.0));
        assert!(!throttle.try_acquire(99.0));
        assert!(throttle.try_acquire(100.0));
        assert!(!throttle.try_acquire(150.0));
        assert!(throttle.try_acquire(230.0));
    }

    #[test]
    fn throttle_window_restarts_from_accepted_call() {
        let mut throttle = Throttle::new(80);
        let accepted = (0..20)
            .map(|i| f64::from(i) * 30.0)
            .filter(|&t| throttle.try_acquire(t))
            .collect::<Vec<_>>();
        assert_eq!(accepted, vec![0.0, 90.0, 180.0, 270.0, 360.0, 450.0, 540.0]);
    }

    #[test]
    fn clock_stepping_back_does_not_block() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.try_acquire(10_000.0));
        let accepted = (0..5)
            .map(|i| 5_000.0 + f64::from(i) * 200.0)
            .filter(|&t| throttle.try_acquire(t))
            .count();
        assert_eq!(accepted, 5);
    }

    #[test]
    fn parses_pixel_lengths() {
        assert_eq!(parse_px("6px"), 6.0);
        assert_eq!(parse_px(" 12.5px "), 12.5);
        assert_eq!(parse_px("0"), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px(""), 0.0);
    }
}
