use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::HtmlElement;

use crate::dom;
use crate::utils::{copy_then, Debouncer};

pub const READY_TO_PASTE: &str = "Ready to paste!";
const FEEDBACK_MS: u32 = 2000;

struct ContactItem {
    tag: Option<HtmlElement>,
    /// Label captured at bind time, so repeated clicks never restore the feedback text.
    label: Option<String>,
    restore: Debouncer,
}

impl ContactItem {
    fn copied(self: &Rc<Self>) {
        let (Some(tag), Some(label)) = (self.tag.clone(), self.label.clone()) else {
            return;
        };
        tag.set_text_content(Some(READY_TO_PASTE));
        self.restore.call(move || tag.set_text_content(Some(&label)));
    }
}

/// Header contact links that copy the email instead of navigating.
pub struct ContactCopy {
    _listeners: Vec<EventListener>,
}

impl ContactCopy {
    pub fn bind(selector: &str, email: &str) -> Option<Self> {
        let links = dom::query_all(selector);
        if links.is_empty() {
            return None;
        }

        let listeners = links
            .iter()
            .map(|link| {
                let tag = dom::query_within(link, ".contact-desc .tag");
                let label = tag
                    .as_ref()
                    .and_then(|tag| tag.text_content())
                    .filter(|text| !text.is_empty());
                let item = Rc::new(ContactItem {
                    tag,
                    label,
                    restore: Debouncer::new(FEEDBACK_MS),
                });
                let email = email.to_string();
                EventListener::new_with_options(
                    link,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let item = Rc::clone(&item);
                        copy_then(email.clone(), move || item.copied());
                    },
                )
            })
            .collect();

        Some(Self {
            _listeners: listeners,
        })
    }
}
