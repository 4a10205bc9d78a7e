use log::{info, warn};
use yew::prelude::*;

use crate::config;

/// Contact form stub. Submitting only acknowledges the message, nothing is
/// sent anywhere.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted");
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(config::CONTACT_ACKNOWLEDGMENT) {
                warn!("Could not show contact acknowledgment: {:?}", err);
            }
        }
    });

    html! {
        <form id="contactForm" class="contact-form" {onsubmit}>
            <div class="form-group">
                <label for="contactName">{"Name"}</label>
                <input type="text" id="contactName" name="name" placeholder="Your name" />
            </div>
            <div class="form-group">
                <label for="contactEmail">{"Email"}</label>
                <input type="email" id="contactEmail" name="email" placeholder="you@example.com" />
            </div>
            <div class="form-group">
                <label for="contactMessage">{"Message"}</label>
                <textarea id="contactMessage" name="message" rows="5" placeholder="Tell us about your event"></textarea>
            </div>
            <button type="submit" class="hero-cta">{"Send message"}</button>
        </form>
    }
}
