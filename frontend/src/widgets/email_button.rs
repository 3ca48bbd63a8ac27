use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use web_sys::HtmlElement;

use crate::dom;
use crate::utils::{copy_then, Debouncer};

pub const SCROLL_THRESHOLD: f64 = 100.0;
pub const COPIED_FEEDBACK_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailMode {
    Initial,
    Email,
    Copied,
}

impl EmailMode {
    /// Value of the `data-text` attribute of the label shown in this mode.
    pub fn key(self) -> &'static str {
        match self {
            EmailMode::Initial => "initial",
            EmailMode::Email => "email",
            EmailMode::Copied => "copied",
        }
    }
}

/// Where a label ends up after switching modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelState {
    Active,
    Exit,
    Idle,
}

pub fn label_state(label_key: &str, mode: EmailMode, was_active: bool) -> LabelState {
    if label_key == mode.key() {
        LabelState::Active
    } else if was_active {
        LabelState::Exit
    } else {
        LabelState::Idle
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailButtonState {
    scrolled: bool,
    mode: EmailMode,
}

impl Default for EmailButtonState {
    fn default() -> Self {
        Self {
            scrolled: false,
            mode: EmailMode::Initial,
        }
    }
}

impl EmailButtonState {
    #[cfg(test)]
    pub fn mode(&self) -> EmailMode {
        self.mode
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn on_scroll(&mut self, offset: f64) -> EmailMode {
        self.scrolled = offset > SCROLL_THRESHOLD;
        self.mode = if self.scrolled {
            EmailMode::Email
        } else {
            EmailMode::Initial
        };
        self.mode
    }

    pub fn can_copy(&self) -> bool {
        self.scrolled
    }

    pub fn copied(&mut self) -> EmailMode {
        self.mode = EmailMode::Copied;
        self.mode
    }

    /// The copy feedback ran out. Falls back to the email label, unless the
    /// page was scrolled back up in the meantime.
    pub fn copy_expired(&mut self) -> Option<EmailMode> {
        if self.scrolled {
            self.mode = EmailMode::Email;
            Some(self.mode)
        } else {
            None
        }
    }
}

struct Inner {
    button: HtmlElement,
    wrapper: HtmlElement,
    labels: Vec<HtmlElement>,
    email: String,
    state: RefCell<EmailButtonState>,
    feedback: Debouncer,
}

impl Inner {
    fn fit_wrapper(&self, label: &HtmlElement) {
        dom::set_style(
            &self.wrapper,
            "width",
            &dom::px(f64::from(label.offset_width())),
        );
    }

    fn show(&self, mode: EmailMode) {
        for label in &self.labels {
            let key = label.get_attribute("data-text").unwrap_or_default();
            match label_state(&key, mode, dom::has_class(label, "active")) {
                LabelState::Active => {
                    dom::add_class(label, "active");
                    dom::remove_class(label, "exit");
                    self.fit_wrapper(label);
                }
                LabelState::Exit => {
                    dom::remove_class(label, "active");
                    dom::add_class(label, "exit");
                }
                LabelState::Idle => {
                    let _ = label.class_list().remove_2("active", "exit");
                }
            }
        }
    }

    fn scrolled(&self) {
        let (mode, scrolled) = {
            let mut state = self.state.borrow_mut();
            (state.on_scroll(dom::scroll_y()), state.is_scrolled())
        };
        let _ = self.button.class_list().toggle_with_force("scrolled", scrolled);
        self.show(mode);
    }

    fn clicked(self: &Rc<Self>) {
        if !self.state.borrow().can_copy() {
            return;
        }
        let weak = Rc::downgrade(self);
        copy_then(self.email.clone(), move || {
            if let Some(inner) = weak.upgrade() {
                inner.copied();
            }
        });
    }

    fn copied(self: &Rc<Self>) {
        let mode = self.state.borrow_mut().copied();
        self.show(mode);
        let weak: Weak<Self> = Rc::downgrade(self);
        self.feedback.call(move || {
            if let Some(inner) = weak.upgrade() {
                let expired = inner.state.borrow_mut().copy_expired();
                if let Some(mode) = expired {
                    inner.show(mode);
                }
            }
        });
    }
}

/// Header button that turns into the contact email on scroll and copies it on click.
pub struct EmailButton {
    _inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl EmailButton {
    pub fn bind(selector: &str, email: &str) -> Option<Self> {
        let button = dom::query(selector)?;
        let wrapper = dom::query_within(&button, ".text-wrapper")?;
        let labels = dom::query_all_within(&button, ".text");
        let first = labels.first()?.clone();
        let window = dom::window()?;

        let inner = Rc::new(Inner {
            button,
            wrapper,
            labels,
            email: email.to_string(),
            state: RefCell::new(EmailButtonState::default()),
            feedback: Debouncer::new(COPIED_FEEDBACK_MS),
        });
        inner.fit_wrapper(&first);

        let on_scroll = Rc::clone(&inner);
        let on_click = Rc::clone(&inner);
        let listeners = vec![
            EventListener::new(&window, "scroll", move |_| on_scroll.scrolled()),
            EventListener::new(&inner.button, "click", move |_| on_click.clicked()),
        ];

        Some(Self {
            _inner: inner,
            _listeners: listeners,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_selects_mode() {
        let mut state = EmailButtonState::default();
        assert_eq!(state.on_scroll(0.0), EmailMode::Initial);
        assert_eq!(state.on_scroll(100.0), EmailMode::Initial);
        assert_eq!(state.on_scroll(100.5), EmailMode::Email);
        assert!(state.is_scrolled());
        assert_eq!(state.on_scroll(12.0), EmailMode::Initial);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn copy_only_allowed_when_scrolled() {
        let mut state = EmailButtonState::default();
        assert!(!state.can_copy());
        state.on_scroll(400.0);
        assert!(state.can_copy());
    }

    #[test]
    fn copied_reverts_to_email_while_scrolled() {
        let mut state = EmailButtonState::default();
        state.on_scroll(400.0);
        assert_eq!(state.copied(), EmailMode::Copied);
        assert_eq!(state.copy_expired(), Some(EmailMode::Email));
        assert_eq!(state.mode(), EmailMode::Email);
    }

    #[test]
    fn expiry_after_scrolling_back_up_keeps_initial() {
        let mut state = EmailButtonState::default();
        state.on_scroll(400.0);
        state.copied();
        state.on_scroll(0.0);
        assert_eq!(state.copy_expired(), None);
        assert_eq!(state.mode(), EmailMode::Initial);
    }

    #[test]
    fn exactly_one_label_is_active() {
        let keys = ["initial", "email", "copied"];
        for mode in [EmailMode::Initial, EmailMode::Email, EmailMode::Copied] {
            let active = keys
                .iter()
                .filter(|key| label_state(key, mode, true) == LabelState::Active)
                .count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn previously_active_label_exits() {
        assert_eq!(label_state("initial", EmailMode::Email, true), LabelState::Exit);
        assert_eq!(label_state("copied", EmailMode::Email, false), LabelState::Idle);
        assert_eq!(label_state("email", EmailMode::Email, false), LabelState::Active);
    }
}
