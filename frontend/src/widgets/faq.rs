use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::HtmlElement;

use crate::dom;

pub const EXPAND_ICON: &str = "+";
pub const COLLAPSE_ICON: &str = "-";
const HEIGHT_TRANSITION: &str = "height 0.3s ease-in-out";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelChange {
    Open(usize),
    Close(usize),
}

/// Tracks the single open answer panel, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    #[cfg(test)]
    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }

    /// Toggles `panel`, closing whichever other panel was open first.
    pub fn toggle(&mut self, panel: usize) -> Vec<PanelChange> {
        let mut changes = Vec::with_capacity(2);
        match self.open {
            Some(open) if open == panel => {
                self.open = None;
                changes.push(PanelChange::Close(panel));
            }
            Some(open) => {
                changes.push(PanelChange::Close(open));
                self.open = Some(panel);
                changes.push(PanelChange::Open(panel));
            }
            None => {
                self.open = Some(panel);
                changes.push(PanelChange::Open(panel));
            }
        }
        changes
    }
}

struct Panel {
    answer: HtmlElement,
    icon: Option<HtmlElement>,
}

impl Panel {
    fn open(&self) {
        dom::add_class(&self.answer, "active");
        let natural = f64::from(self.answer.scroll_height());
        dom::set_style(&self.answer, "height", &dom::px(natural));
        self.set_icon(COLLAPSE_ICON);
    }

    fn close(&self) {
        dom::set_style(&self.answer, "height", "0px");
        dom::remove_class(&self.answer, "active");
        self.set_icon(EXPAND_ICON);
    }

    fn set_icon(&self, glyph: &str) {
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(glyph));
        }
    }
}

struct Inner {
    panels: Vec<Panel>,
    accordion: RefCell<Accordion>,
}

impl Inner {
    fn toggle(&self, index: usize) {
        let changes = self.accordion.borrow_mut().toggle(index);
        for change in changes {
            match change {
                PanelChange::Open(i) => self.panels[i].open(),
                PanelChange::Close(i) => self.panels[i].close(),
            }
        }
    }
}

/// Question list where at most one answer is expanded.
pub struct Faq {
    _inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl Faq {
    pub fn bind(item_selector: &str) -> Option<Self> {
        let mut panels = Vec::new();
        let mut questions = Vec::new();
        for item in dom::query_all(item_selector) {
            let (Some(question), Some(answer)) = (
                dom::query_within(&item, ".question-item"),
                dom::query_within(&item, ".answer-item"),
            ) else {
                continue;
            };
            dom::set_style(&answer, "height", "0px");
            dom::set_style(&answer, "transition", HEIGHT_TRANSITION);
            panels.push(Panel {
                answer,
                icon: dom::query_within(&question, ".question-icon"),
            });
            questions.push(question);
        }
        if panels.is_empty() {
            return None;
        }

        let inner = Rc::new(Inner {
            panels,
            accordion: RefCell::new(Accordion::default()),
        });
        let listeners = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let inner = Rc::clone(&inner);
                EventListener::new(question, "click", move |_| inner.toggle(index))
            })
            .collect();

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
    fn opens_closed_panel() {
        let mut accordion = Accordion::default();
        assert_eq!(accordion.toggle(2), vec![PanelChange::Open(2)]);
        assert_eq!(accordion.open_panel(), Some(2));
    }

    #[test]
    fn second_click_closes_panel() {
        let mut accordion = Accordion::default();
        accordion.toggle(1);
        assert_eq!(accordion.toggle(1), vec![PanelChange::Close(1)]);
        assert_eq!(accordion.open_panel(), None);
    }

    #[test]
    fn opening_another_panel_closes_the_first() {
        let mut accordion = Accordion::default();
        accordion.toggle(0);
        assert_eq!(
            accordion.toggle(3),
            vec![PanelChange::Close(0), PanelChange::Open(3)]
        );
        assert_eq!(accordion.open_panel(), Some(3));
    }

    #[test]
    fn never_two_panels_open() {
        let mut accordion = Accordion::default();
        let mut open = vec![false; 4];
        for panel in [0, 2, 2, 1, 3, 3, 3, 0, 1] {
            for change in accordion.toggle(panel) {
                match change {
                    PanelChange::Open(i) => open[i] = true,
                    PanelChange::Close(i) => open[i] = false,
                }
            }
            assert!(open.iter().filter(|&&o| o).count() <= 1);
            assert_eq!(accordion.open_panel(), open.iter().position(|&o| o));
        }
    }
}
