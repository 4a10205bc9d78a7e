use yew::prelude::*;

use crate::components::contact_form::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-container">
            <h1>{"Contact"}</h1>
            <p>{"Questions about pricing, onboarding or a large event? Drop us a line."}</p>
            <ContactForm />
        </div>
    }
}
