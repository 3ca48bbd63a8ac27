use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use web_sys::HtmlElement;

use crate::dom;
use crate::utils::Debouncer;

pub const DEFAULT_INTERVAL_MS: u32 = 6400;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const ACTIVE_CLASS: &str = "testimonial-state-active";

/// Index into the testimonials, wrapping around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.index
    }

    /// Moves to the next item and returns `(previous, next)`.
    pub fn advance(&mut self) -> (usize, usize) {
        let previous = self.index;
        self.index = (self.index + 1) % self.len;
        (previous, self.index)
    }
}

pub fn tallest<I>(heights: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    heights.into_iter().fold(0.0, f64::max)
}

struct Inner {
    container: HtmlElement,
    items: Vec<HtmlElement>,
    rotation: RefCell<Rotation>,
    resize: Debouncer,
}

impl Inner {
    fn fit_height(&self) {
        let height = tallest(self.items.iter().map(|item| f64::from(item.offset_height())));
        dom::set_style(&self.container, "height", &dom::px(height));
    }

    fn advance(&self) {
        let (previous, next) = self.rotation.borrow_mut().advance();
        dom::remove_class(&self.items[previous], ACTIVE_CLASS);
        dom::add_class(&self.items[next], ACTIVE_CLASS);
    }
}

/// Rotates the visible testimonial on a fixed interval.
pub struct TestimonialsCarousel {
    _inner: Rc<Inner>,
    _interval: Interval,
    _resize: EventListener,
}

impl TestimonialsCarousel {
    pub fn bind(container: &str, items: &str, interval_ms: u32) -> Option<Self> {
        let container = dom::query(container)?;
        let items = dom::query_all(items);
        let rotation = Rotation::new(items.len())?;
        let window = dom::window()?;

        let inner = Rc::new(Inner {
            container,
            items,
            rotation: RefCell::new(rotation),
            resize: Debouncer::new(RESIZE_DEBOUNCE_MS),
        });
        inner.fit_height();
        inner.advance();

        let on_resize = Rc::clone(&inner);
        let resize = EventListener::new(&window, "resize", move |_| {
            let weak = Rc::downgrade(&on_resize);
            on_resize.resize.call(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.fit_height();
                }
            });
        });

        let on_tick = Rc::clone(&inner);
        let interval = Interval::new(interval_ms, move || on_tick.advance());

        Some(Self {
            _inner: inner,
            _interval: interval,
            _resize: resize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_rotation() {
        assert_eq!(Rotation::new(0), None);
    }

    #[test]
    fn visits_every_index_in_order() {
        let mut rotation = Rotation::new(4).unwrap();
        let visited = (0..9).map(|_| rotation.advance().1).collect::<Vec<_>>();
        assert_eq!(visited, vec![1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn previous_is_always_the_deactivated_item() {
        let mut rotation = Rotation::new(3).unwrap();
        for _ in 0..7 {
            let before = rotation.current();
            let (previous, next) = rotation.advance();
            assert_eq!(previous, before);
            assert_eq!(next, rotation.current());
            assert_ne!(previous, next);
        }
    }

    #[test]
    fn three_intervals_return_to_start() {
        let mut rotation = Rotation::new(3).unwrap();
        let start = rotation.current();
        let elapsed_ms = 3 * DEFAULT_INTERVAL_MS;
        for _ in 0..elapsed_ms / DEFAULT_INTERVAL_MS {
            rotation.advance();
        }
        assert_eq!(rotation.current(), start);
    }

    #[test]
    fn single_item_stays_active() {
        let mut rotation = Rotation::new(1).unwrap();
        assert_eq!(rotation.advance(), (0, 0));
    }

    #[test]
    fn container_takes_tallest_item() {
        assert_eq!(tallest([120.0, 340.0, 210.0]), 340.0);
        assert_eq!(tallest(Vec::<f64>::new()), 0.0);
    }
}
