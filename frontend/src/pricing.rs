use crate::config;
use crate::format::format_number;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Starter,
    Growth,
    Enterprise,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Starter, Tier::Growth, Tier::Enterprise];

    /// Value of the card's `data-tier` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Tier::Starter => "starter",
            Tier::Growth => "growth",
            Tier::Enterprise => "enterprise",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Starter => "Starter",
            Tier::Growth => "Growth",
            Tier::Enterprise => "Enterprise",
        }
    }

    /// Highest monthly ticket count covered, `None` for unlimited.
    pub fn max_tickets(self) -> Option<u32> {
        match self {
            Tier::Starter => Some(config::STARTER_MAX_TICKETS),
            Tier::Growth => Some(config::GROWTH_MAX_TICKETS),
            Tier::Enterprise => None,
        }
    }

    /// Fixed monthly fee in euros, `None` when the price is negotiated.
    pub fn monthly_fee(self) -> Option<u32> {
        match self {
            Tier::Starter => Some(config::STARTER_MONTHLY_FEE),
            Tier::Growth => Some(config::GROWTH_MONTHLY_FEE),
            Tier::Enterprise => None,
        }
    }
}

pub fn tier_for_tickets(tickets: u32) -> Tier {
    if tickets <= config::STARTER_MAX_TICKETS {
        Tier::Starter
    } else if tickets <= config::GROWTH_MAX_TICKETS {
        Tier::Growth
    } else {
        Tier::Enterprise
    }
}

/// Ticket count for a slider position. Positions past the end stick to the
/// last step.
pub fn tickets_for_step(index: usize) -> u32 {
    let last = config::TICKET_STEPS.len() - 1;
    config::TICKET_STEPS[index.min(last)]
}

/// What the same volume would cost on a commission-based platform.
pub fn traditional_cost(tickets: u32, unit_price: u32) -> f64 {
    tickets as f64 * unit_price as f64 * config::COMMISSION_RATE
}

pub fn savings_percent(tier: Tier, traditional_cost: f64) -> u32 {
    let (our_cost, floor) = match tier.monthly_fee() {
        Some(fee) => (fee as f64, 0),
        None => (config::ENTERPRISE_ESTIMATED_COST, config::ENTERPRISE_MIN_SAVINGS),
    };
    if traditional_cost <= 0.0 {
        return floor;
    }
    let percent = ((traditional_cost - our_cost) / traditional_cost * 100.0).round();
    percent.clamp(floor as f64, config::MAX_SAVINGS as f64) as u32
}

pub fn parse_step_index(value: &str) -> usize {
    value
        .trim()
        .parse::<usize>()
        .map(|index| index.min(config::TICKET_STEPS.len() - 1))
        .unwrap_or(config::DEFAULT_STEP_INDEX)
}

pub fn parse_ticket_price(value: &str) -> u32 {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|price| *price > 0)
        .unwrap_or(config::DEFAULT_TICKET_PRICE)
}

/// Price the calculator works with: the selector's value, or the default
/// ticket price on pages that render no selector.
pub fn effective_unit_price(selected: Option<u32>) -> u32 {
    selected.unwrap_or(config::DEFAULT_TICKET_PRICE)
}

/// Everything the calculator displays for one slider position and price.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    pub tickets: u32,
    pub unit_price: u32,
    pub tier: Tier,
    pub savings_percent: u32,
}

impl Estimate {
    pub fn compute(step_index: usize, unit_price: u32) -> Self {
        let tickets = tickets_for_step(step_index);
        let tier = tier_for_tickets(tickets);
        let savings_percent = savings_percent(tier, traditional_cost(tickets, unit_price));
        Self { tickets, unit_price, tier, savings_percent }
    }

    pub fn ticket_count_text(&self) -> String {
        format_number(self.tickets as i64)
    }

    pub fn fee_line(&self) -> String {
        match self.tier.monthly_fee() {
            Some(fee) => format!("— €{}/mo  with {} tier", fee, self.tier.name()),
            None => "— Contact us".to_string(),
        }
    }

    pub fn is_active_card(&self, card: Tier) -> bool {
        card == self.tier
    }

    /// `class` attribute for a pricing card.
    pub fn card_class(&self, card: Tier) -> &'static str {
        if self.is_active_card(card) {
            "pricing-card pricing-card-active"
        } else {
            "pricing-card"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(tier_for_tickets(100), Tier::Starter);
        assert_eq!(tier_for_tickets(500), Tier::Starter);
        assert_eq!(tier_for_tickets(501), Tier::Growth);
        assert_eq!(tier_for_tickets(5000), Tier::Growth);
        assert_eq!(tier_for_tickets(5001), Tier::Enterprise);
        assert_eq!(tier_for_tickets(10_000), Tier::Enterprise);
    }

    #[test]
    fn tier_ceilings_agree_with_classification() {
        for tier in Tier::ALL {
            if let Some(max) = tier.max_tickets() {
                assert_eq!(tier_for_tickets(max), tier);
                assert_ne!(tier_for_tickets(max + 1), tier);
            }
        }
    }

    #[test]
    fn steps_resolve_and_saturate() {
        assert_eq!(tickets_for_step(0), 100);
        assert_eq!(tickets_for_step(3), 1000);
        assert_eq!(tickets_for_step(6), 10_000);
        assert_eq!(tickets_for_step(42), 10_000);
    }

    #[test]
    fn savings_at_default_price() {
        assert_eq!(Estimate::compute(0, 30).savings_percent, 12);
        assert_eq!(Estimate::compute(2, 30).savings_percent, 82);
        assert_eq!(Estimate::compute(3, 30).savings_percent, 78);
        assert_eq!(Estimate::compute(5, 30).savings_percent, 96);
        assert_eq!(Estimate::compute(6, 30).savings_percent, 93);
    }

    #[test]
    fn fixed_fee_savings_floor_at_zero() {
        // 100 tickets at €10 is €75 of commission, well under the €199 fee
        assert_eq!(Estimate::compute(0, 10).savings_percent, 0);
    }

    #[test]
    fn enterprise_savings_floor_at_fifty() {
        // €750 of commission against the €1500 estimate would be -100%
        let estimate = Estimate::compute(6, 1);
        assert_eq!(estimate.tier, Tier::Enterprise);
        assert_eq!(estimate.savings_percent, 50);
    }

    #[test]
    fn savings_cap_at_ninety_nine() {
        assert_eq!(Estimate::compute(5, 100).savings_percent, 99);
        assert_eq!(savings_percent(Tier::Growth, 10_000_000.0), 99);
        assert_eq!(savings_percent(Tier::Enterprise, 10_000_000.0), 99);
    }

    #[test]
    fn savings_always_in_display_range() {
        for index in 0..config::TICKET_STEPS.len() {
            for price in 1..=200 {
                let estimate = Estimate::compute(index, price);
                let floor = match estimate.tier {
                    Tier::Enterprise => 50,
                    _ => 0,
                };
                assert!(
                    (floor..=99).contains(&estimate.savings_percent),
                    "index {index} price {price}: {}",
                    estimate.savings_percent
                );
            }
        }
    }

    #[test]
    fn exactly_one_card_is_active() {
        for index in 0..config::TICKET_STEPS.len() {
            let estimate = Estimate::compute(index, config::DEFAULT_TICKET_PRICE);
            let active: Vec<Tier> = Tier::ALL
                .into_iter()
                .filter(|card| estimate.is_active_card(*card))
                .collect();
            assert_eq!(active, vec![tier_for_tickets(estimate.tickets)]);
        }
    }

    #[test]
    fn exactly_one_rendered_card_class_is_active() {
        for index in 0..config::TICKET_STEPS.len() {
            for price in config::TICKET_PRICE_OPTIONS {
                let estimate = Estimate::compute(index, price);
                let classes: Vec<&str> = Tier::ALL.into_iter().map(|card| estimate.card_class(card)).collect();
                let active: Vec<usize> = classes
                    .iter()
                    .enumerate()
                    .filter(|(_, class)| class.split_whitespace().any(|c| c == "pricing-card-active"))
                    .map(|(position, _)| position)
                    .collect();
                assert_eq!(active.len(), 1, "index {index} price {price}: {classes:?}");
                assert_eq!(Tier::ALL[active[0]], estimate.tier);
                assert!(classes.iter().all(|class| class.split_whitespace().next() == Some("pricing-card")));
            }
        }
    }

    #[test]
    fn missing_price_selector_uses_default_price() {
        assert_eq!(effective_unit_price(None), 30);
        assert_eq!(effective_unit_price(Some(75)), 75);
        assert_eq!(
            Estimate::compute(3, effective_unit_price(None)),
            Estimate::compute(3, config::DEFAULT_TICKET_PRICE)
        );
    }

    #[test]
    fn fee_line_per_tier() {
        assert_eq!(Estimate::compute(1, 30).fee_line(), "— €199/mo  with Starter tier");
        assert_eq!(Estimate::compute(4, 30).fee_line(), "— €499/mo  with Growth tier");
        assert_eq!(Estimate::compute(6, 30).fee_line(), "— Contact us");
    }

    #[test]
    fn ticket_count_uses_thousands_separator() {
        assert_eq!(Estimate::compute(1, 30).ticket_count_text(), "250");
        assert_eq!(Estimate::compute(4, 30).ticket_count_text(), "2.000");
        assert_eq!(Estimate::compute(6, 30).ticket_count_text(), "10.000");
    }

    #[test]
    fn control_values_fall_back_to_defaults() {
        assert_eq!(parse_step_index("4"), 4);
        assert_eq!(parse_step_index("12"), 6);
        assert_eq!(parse_step_index("abc"), config::DEFAULT_STEP_INDEX);
        assert_eq!(parse_ticket_price("75"), 75);
        assert_eq!(parse_ticket_price(""), config::DEFAULT_TICKET_PRICE);
        assert_eq!(parse_ticket_price("0"), config::DEFAULT_TICKET_PRICE);
    }
}
