use yew::prelude::*;
use log::{debug, error, info};

mod config;
mod dom;
mod utils;
mod pages {
    pub mod home;
}
mod components {
    pub mod widget_styles;
}
mod widgets {
    pub mod contact_copy;
    pub mod cursor;
    pub mod email_button;
    pub mod faq;
    pub mod helix;
    pub mod marquee;
    pub mod testimonials;
    pub mod trail;
}

use components::widget_styles::WidgetStyles;
use config::SiteConfig;
use pages::home::Home;
use widgets::{
    contact_copy::ContactCopy,
    cursor::CustomCursor,
    email_button::EmailButton,
    faq::Faq,
    helix,
    marquee::Marquee,
    testimonials::TestimonialsCarousel,
    trail::TrailEffect,
};

fn bound<T>(name: &str, widget: Option<T>) -> Option<T> {
    match &widget {
        Some(_) => debug!("Bound {}", name),
        None => debug!("No markup for {}, leaving it disabled", name),
    }
    widget
}

/// Every interactive behavior on the page. Dropping it detaches listeners,
/// timers and frame loops.
struct Widgets {
    _cursors: Vec<CustomCursor>,
    _email: Option<EmailButton>,
    _contacts: Option<ContactCopy>,
    _testimonials: Option<TestimonialsCarousel>,
    _faq: Option<Faq>,
    _trail: Option<TrailEffect>,
    _marquee: Option<Marquee>,
}

impl Widgets {
    fn bind(config: &SiteConfig) -> Self {
        match helix::build(&config.helix) {
            Ok(units) => debug!("Built {} helix units", units),
            Err(err) => error!("Failed to build helix: {:?}", err),
        }

        Self {
            _cursors: config
                .cursors
                .iter()
                .filter_map(|binding| bound(&binding.cursor, CustomCursor::bind(binding)))
                .collect(),
            _email: bound(
                "email button",
                EmailButton::bind(".content-email-button", &config.email),
            ),
            _contacts: bound("contact links", ContactCopy::bind(".copy-item", &config.email)),
            _testimonials: bound(
                "testimonials",
                TestimonialsCarousel::bind(
                    ".clients-testimonials-container",
                    ".testimonial-item",
                    config.testimonial_interval_ms,
                ),
            ),
            _faq: bound("faq", Faq::bind(".faq-item-container")),
            _trail: bound("sticker trail", TrailEffect::bind(&config.trail)),
            _marquee: bound("marquee", Marquee::bind(&config.marquee)),
        }
    }
}

#[function_component]
fn App() -> Html {
    let config = use_state(SiteConfig::load);

    {
        let config = (*config).clone();
        use_effect_with_deps(
            move |_| {
                let widgets = Widgets::bind(&config);
                move || drop(widgets)
            },
            (),
        );
    }

    html! {
        <>
            <WidgetStyles />
            <Home email={config.email.clone()} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
