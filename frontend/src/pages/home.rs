use yew::prelude::*;

struct Project {
    title: &'static str,
    kind: &'static str,
    year: &'static str,
}

const PROJECTS: &[Project] = &[
    Project { title: "Nebula", kind: "Brand identity", year: "2024" },
    Project { title: "Fieldnotes", kind: "Editorial website", year: "2024" },
    Project { title: "Orbit Labs", kind: "Product design", year: "2023" },
    Project { title: "Quiet Rooms", kind: "Art direction", year: "2022" },
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Working together felt effortless. The site shipped early and still looks fresh a year later.", "Claire M., founder"),
    ("Sharp eye, fast hands, and a rare sense of humour in review meetings.", "Tom R., creative director"),
    ("Our conversion rate doubled after the redesign. Enough said.", "Inès B., head of growth"),
];

const QUESTIONS: &[(&str, &str)] = &[
    ("How long does a project take?", "Most websites take four to eight weeks from kickoff to launch, depending on scope and content readiness."),
    ("Do you work with agencies?", "Yes. I regularly join agency teams as a freelance designer or as a design lead for a single project."),
    ("Which tools do you use?", "Figma for design, Webflow or hand-written code for builds, and whatever your team already lives in for feedback."),
    ("Can you help after launch?", "Of course. Retainers cover small iterations, new pages and the occasional late-night fix."),
];

const MARQUEE_IMAGES: &[&str] = &[
    "assets/header/marquee_01.webp",
    "assets/header/marquee_02.webp",
    "assets/header/marquee_03.webp",
    "assets/header/marquee_04.webp",
    "assets/header/marquee_05.webp",
    "assets/header/marquee_06.webp",
];

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="header">
            <div class="header-contact">
                <a class="copy-item" href="#contact">
                    <span class="contact-desc">
                        <span class="tag">{"Copy my email"}</span>
                    </span>
                </a>
            </div>
            <div class="header-marquee-container">
                <div class="header-marquee-track">
                    { for MARQUEE_IMAGES.iter().map(|src| html! {
                        <div class="header-marquee-item">
                            <img src={*src} alt="" loading="lazy" />
                        </div>
                    }) }
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmailButtonProps {
    pub email: String,
}

#[function_component(EmailButtonMarkup)]
fn email_button_markup(props: &EmailButtonProps) -> Html {
    html! {
        <button class="content-email-button" type="button">
            <span class="text-wrapper">
                <span class="text active" data-text="initial">{"Let's talk"}</span>
                <span class="text" data-text="email">{&props.email}</span>
                <span class="text" data-text="copied">{"Copied!"}</span>
            </span>
        </button>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section class="projects">
            <div class="cursor-animation-eye" aria-hidden="true"></div>
            <ul class="project-list">
                { for PROJECTS.iter().map(|project| html! {
                    <li class="project-item">
                        <span class="project-title">{project.title}</span>
                        <span class="project-kind">{project.kind}</span>
                        <span class="project-year">{project.year}</span>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="clients">
            <h2>{"Kind words"}</h2>
            <div class="clients-testimonials-container">
                { for TESTIMONIALS.iter().enumerate().map(|(i, (quote, author))| html! {
                    <figure class={classes!("testimonial-item", (i == 0).then_some("testimonial-state-active"))}>
                        <blockquote>{*quote}</blockquote>
                        <figcaption>{*author}</figcaption>
                    </figure>
                }) }
            </div>
        </section>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    html! {
        <section class="faq">
            <h2>{"Questions"}</h2>
            { for QUESTIONS.iter().map(|(question, answer)| html! {
                <div class="faq-item-container">
                    <button class="question-item" type="button">
                        <span class="question-text">{*question}</span>
                        <span class="question-icon">{"+"}</span>
                    </button>
                    <div class="answer-item">
                        <p>{*answer}</p>
                    </div>
                </div>
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub email: String,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="home-page">
            <Header />
            <section class="hero">
                <div class="cursor-animation-flame" aria-hidden="true"></div>
                <h1>{"Independent designer building calm, fast websites."}</h1>
                <div class="flask-container">
                    <img src="assets/hero/flask.svg" alt="Flask illustration" />
                </div>
                <EmailButtonMarkup email={props.email.clone()} />
            </section>
            <Projects />
            <Testimonials />
            <Faq />
            <footer class="footer">
                <div class="stickers-container"></div>
                <div id="animation-helix"></div>
                <p class="footer-note">{"© Adrien Gervaix"}</p>
            </footer>
        </div>
    }
}
