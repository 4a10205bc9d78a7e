use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::pricing_calculator::PricingCalculator;
use crate::components::success_stats::SuccessStats;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Land at the top on mount, the navbar state is derived from it
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Hassle-free ticketing for everyone"}</h1>
                    <p class="hero-subtitle">
                        {"Sell tickets for a flat monthly fee. No commission, no surprises, every euro goes to your event."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Pricing} classes="forward-link">
                            <button class="hero-cta">{"See what you save"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Contact} classes="faq-link">
                            {"Talk to us"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <SuccessStats />

            <section class="pricing-section" id="pricing">
                <div class="section-header">
                    <h2>{"Flat fees instead of commission"}</h2>
                    <p>{"Move the slider to your monthly ticket volume and see how much stays in your pocket, at a €30 average ticket."}</p>
                </div>
                <PricingCalculator show_price_selector={false} />
            </section>

            <section class="contact-section" id="contact">
                <div class="section-header">
                    <h2>{"Get in touch"}</h2>
                    <p>{"Planning something big? Tell us about it."}</p>
                </div>
                <ContactForm />
            </section>

            <footer class="footer">
                <p>{"© Hibilet · Hassle-free ticketing for everyone"}</p>
            </footer>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="forward-link">
                <button class="hero-cta">{"Back to the front page"}</button>
            </Link<Route>>
        </div>
    }
}
