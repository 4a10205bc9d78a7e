use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::pricing_calculator::PricingCalculator;
use crate::Route;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <div class="pricing-container">
            <div class="pricing-header">
                <h1>{"One flat fee. Zero commission."}</h1>
                <p>{"Pick the plan that matches your monthly ticket volume."}</p>
            </div>
            <PricingCalculator />
            <div class="pricing-footer">
                <p>{"Selling more than 5.000 tickets a month? "}
                    <Link<Route> to={Route::Contact} classes="forward-link">{"Contact us"}</Link<Route>>
                    {" for an enterprise quote."}
                </p>
            </div>
        </div>
    }
}
