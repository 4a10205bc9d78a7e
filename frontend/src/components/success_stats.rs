use log::info;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::count_up::{CounterPhase, CounterSpec};
use crate::visibility::{VisibilityObserver, SUCCESS_COUNTERS_STARTED};

#[derive(Properties, PartialEq)]
pub struct SuccessStatsProps {
    #[prop_or_else(config::success_stats)]
    pub counters: Vec<CounterSpec>,
}

/// Success figures that count up the first time the section scrolls into view.
/// The run happens once per page load; coming back to the page after a route
/// change shows the final figures straight away.
#[function_component(SuccessStats)]
pub fn success_stats(props: &SuccessStatsProps) -> Html {
    let section_ref = use_node_ref();
    let phase = use_state(|| CounterPhase::on_mount(SUCCESS_COUNTERS_STARTED.is_consumed()));

    {
        let section_ref = section_ref.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let observer = section_ref.cast::<Element>().and_then(|section| {
                    VisibilityObserver::observe_once(
                        &section,
                        config::SUCCESS_VISIBILITY_THRESHOLD,
                        &SUCCESS_COUNTERS_STARTED,
                        move || {
                            info!("Success section visible, starting counters");
                            phase.set(CounterPhase::Running);
                        },
                    )
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <section class="success-map-section" ref={section_ref}>
            <h2>{"Organizers already count on Hibilet"}</h2>
            <div class="success-grid">
                { for props.counters.iter().map(|counter| html! {
                    <div class="success-item">
                        <CountUpValue counter={counter.clone()} phase={*phase} />
                        <p class="success-label">{ counter.label.clone() }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountUpValueProps {
    pub counter: CounterSpec,
    pub phase: CounterPhase,
}

/// Shows the start value while idle, the target once done, and hands over to
/// a one-shot animation while running.
#[function_component(CountUpValue)]
pub fn count_up_value(props: &CountUpValueProps) -> Html {
    match props.counter.settled_text(props.phase) {
        Some(text) => value_span(&props.counter, text),
        None => html! { <AnimatedValue counter={props.counter.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct AnimatedValueProps {
    counter: CounterSpec,
}

#[function_component(AnimatedValue)]
fn animated_value(props: &AnimatedValueProps) -> Html {
    // Re-renders once per animation frame until the duration has elapsed
    let progress = use_raf(config::COUNT_UP_DURATION_MS, 0);
    value_span(&props.counter, props.counter.text_at(progress))
}

fn value_span(counter: &CounterSpec, text: String) -> Html {
    html! {
        <span
            class="success-value"
            data-count={counter.target.to_string()}
            data-start={counter.start.to_string()}
            data-prefix={counter.prefix.clone()}
            data-suffix={counter.suffix.clone()}
        >
            { text }
        </span>
    }
}
