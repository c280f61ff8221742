use yew::prelude::*;

use crate::components::booking_modal::BookingModal;
use crate::components::chat_widget::ChatWidget;
use crate::components::contact_form::ContactForm;
use crate::components::cookie_banner::CookieBanner;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::reveal::use_reveal_on_scroll;
use crate::components::scroll_to_top::ScrollToTop;
use crate::components::sponsors::SponsorGrid;
use crate::components::team::TeamGrid;
use crate::components::welcome_toast::WelcomeToast;
use crate::i18n::tr;
use crate::prefs::PrefsContext;

const SERVICES: [(&str, &str, &str); 4] = [
    ("⚡", "Edge-Native Web Apps", "Fast, resilient front-ends served close to your users."),
    ("🤖", "AI Integration", "Assistants, search and automation wired into your product."),
    ("📱", "Mobile Experiences", "Cross-platform apps with a native feel."),
    ("🛠️", "Cloud & DevOps", "Pipelines, observability and infrastructure that scale."),
];

const WORKS: [(&str, &str); 3] = [
    ("Fintech Dashboard", "Real-time portfolio analytics for a regional bank."),
    ("Smart Logistics", "Route planning and tracking for last-mile delivery."),
    ("EdTech Platform", "Bilingual learning platform for Khmer students."),
];

const STACK: [&str; 8] = ["Rust", "TypeScript", "WebAssembly", "Python", "PostgreSQL", "Kubernetes", "Cloudflare", "OpenAI"];

#[function_component(Landing)]
pub fn landing() -> Html {
    let lang = use_context::<PrefsContext>().map(|p| p.lang).unwrap_or_default();
    let booking_open = use_state(|| false);

    use_reveal_on_scroll();

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: ()| booking_open.set(true))
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: ()| booking_open.set(false))
    };

    html! {
        <div class="landing-page">
            <Nav />
            <Hero on_book={open_booking} />
            <main>
                <SponsorGrid />

                <section id="services" class="services">
                    <h2 class="section-title" data-i18n="section.services">{ tr(lang, "section.services") }</h2>
                    <div class="card-grid">
                        { for SERVICES.iter().map(|(icon, title, desc)| html! {
                            <div class="card service-card" key={*title}>
                                <div class="card-icon">{ *icon }</div>
                                <h3>{ *title }</h3>
                                <p>{ *desc }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="works" class="works">
                    <h2 class="section-title" data-i18n="section.works">{ tr(lang, "section.works") }</h2>
                    <p class="section-desc" data-i18n="section.works.desc">{ tr(lang, "section.works.desc") }</p>
                    <div class="card-grid">
                        { for WORKS.iter().map(|(title, desc)| html! {
                            <div class="card work-card" key={*title}>
                                <h3>{ *title }</h3>
                                <p>{ *desc }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="tech" class="tech">
                    <div class="tech-stack">
                        { for STACK.iter().map(|name| html! { <span class="tech-pill" key={*name}>{ *name }</span> }) }
                    </div>
                </section>

                <TeamGrid />

                <section id="contact" class="contact">
                    <h2 class="section-title" data-i18n="contact.title">{ tr(lang, "contact.title") }</h2>
                    <ContactForm />
                </section>
            </main>
            <footer class="footer">
                <p>{"© Nisay Tech. "}<a href="terms.html">{"Terms"}</a>{" · "}<a href="privacy.html">{"Privacy"}</a></p>
            </footer>

            <ScrollToTop />
            <ChatWidget />
            <BookingModal open={*booking_open} on_close={close_booking} />
            <WelcomeToast />
            <CookieBanner />
        </div>
    }
}
