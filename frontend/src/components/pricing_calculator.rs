use log::debug;
use stylist::yew::styled_component;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config;
use crate::format::format_number;
use crate::pricing::{effective_unit_price, parse_step_index, parse_ticket_price, Estimate, Tier};
use crate::tooltip;

#[derive(Properties, PartialEq)]
pub struct PricingCalculatorProps {
    #[prop_or(true)]
    pub show_price_selector: bool,
}

/// Savings estimator: a ticket-volume slider and a ticket-price selector
/// driving the savings figure and the highlighted pricing card.
#[styled_component(PricingCalculator)]
pub fn pricing_calculator(props: &PricingCalculatorProps) -> Html {
    let step = use_state(|| config::DEFAULT_STEP_INDEX);
    let unit_price = use_state(|| config::DEFAULT_TICKET_PRICE);
    let tooltip_ref = use_node_ref();

    {
        let tooltip_ref = tooltip_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = tooltip_ref.cast::<Element>() {
                    tooltip::init_tooltip(&element);
                }
                || ()
            },
            (),
        );
    }

    let on_slider_input = {
        let step = step.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            step.set(parse_step_index(&input.value()));
        })
    };

    let on_price_change = {
        let unit_price = unit_price.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            unit_price.set(parse_ticket_price(&select.value()));
        })
    };

    let selected_price = props.show_price_selector.then(|| *unit_price);
    let estimate = Estimate::compute(*step, effective_unit_price(selected_price));
    debug!(
        "Pricing estimate: {} tickets at €{} -> {} tier, {}% saved",
        estimate.tickets,
        estimate.unit_price,
        estimate.tier.name(),
        estimate.savings_percent
    );

    let calculator = css!(
        r#"
        max-width: 720px;
        margin: 0 auto 3rem;
        padding: 2rem;
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(30, 144, 255, 0.15);

        .calculator-row {
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 1rem;
            margin-bottom: 1.25rem;
        }

        input[type="range"] {
            flex: 1;
            accent-color: #1e90ff;
        }

        .savings-figure {
            font-size: 3rem;
            font-weight: 700;
            color: #1e90ff;
        }

        .tier-fee {
            color: #999;
            margin-left: 0.5rem;
        }

        .pricing-tooltip-wrap {
            cursor: help;
            border-bottom: 1px dotted #999;
        }
        "#
    );

    html! {
        <div class="pricing-calculator-section">
            <div class={calculator}>
                <div class="calculator-row">
                    <label for="ticketSlider">{"Tickets per month: "}<strong id="ticketCount">{ estimate.ticket_count_text() }</strong></label>
                    <input
                        type="range"
                        id="ticketSlider"
                        min="0"
                        max={(config::TICKET_STEPS.len() - 1).to_string()}
                        step="1"
                        value={step.to_string()}
                        oninput={on_slider_input}
                    />
                </div>
                {
                    if props.show_price_selector {
                        html! {
                            <div class="calculator-row">
                                <label for="ticketPriceSelect">{"Average ticket price"}</label>
                                <select id="ticketPriceSelect" onchange={on_price_change}>
                                    { for config::TICKET_PRICE_OPTIONS.iter().map(|option| html! {
                                        <option value={option.to_string()} selected={*option == *unit_price}>
                                            { format!("€{}", option) }
                                        </option>
                                    }) }
                                </select>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="calculator-row">
                    <p>
                        <span class="pricing-tooltip-wrap" ref={tooltip_ref} title={config::SAVINGS_TOOLTIP}>
                            {"Estimated savings vs. commission-based ticketing"}
                        </span>
                    </p>
                    <p>
                        <span class="savings-figure"><span id="savingsPercent">{ estimate.savings_percent.to_string() }</span>{"%"}</span>
                        <span class="tier-fee" id="tierFeeDisplay">{ estimate.fee_line() }</span>
                    </p>
                </div>
            </div>
            <PricingCards estimate={estimate.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingCardsProps {
    pub estimate: Estimate,
}

#[function_component(PricingCards)]
pub fn pricing_cards(props: &PricingCardsProps) -> Html {
    html! {
        <div class="pricing-grid">
            { for Tier::ALL.into_iter().map(|tier| {
                let price = match tier.monthly_fee() {
                    Some(fee) => html! {
                        <>
                            <span class="amount">{ format!("€{}", fee) }</span>
                            <span class="period">{"/month"}</span>
                        </>
                    },
                    None => html! { <span class="amount">{"Let's talk"}</span> },
                };
                let volume = match tier.max_tickets() {
                    Some(max) => format!("Up to {} tickets per month", format_number(max as i64)),
                    None => "Unlimited tickets".to_string(),
                };
                html! {
                    <div
                        class={props.estimate.card_class(tier)}
                        data-tier={tier.key()}
                    >
                        <div class="card-header">
                            <h3>{ tier.name() }</h3>
                            <div class="price">{ price }</div>
                        </div>
                        <ul>
                            <li>{ volume }</li>
                            <li>{"0% commission on every ticket"}</li>
                            {
                                if tier == Tier::Enterprise {
                                    html! { <li>{"Dedicated account manager"}</li> }
                                } else {
                                    html! { <li>{"Email support"}</li> }
                                }
                            }
                        </ul>
                    </div>
                }
            }) }
        </div>
    }
}
