use log::Level;

use crate::count_up::CounterSpec;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Success counters
pub const COUNT_UP_DURATION_MS: u32 = 1500;
pub const SUCCESS_VISIBILITY_THRESHOLD: f64 = 0.3;

// Navbar
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

// Pricing calculator
pub const TICKET_STEPS: [u32; 7] = [100, 250, 500, 1000, 2000, 5000, 10000];
pub const DEFAULT_STEP_INDEX: usize = 3;
pub const COMMISSION_RATE: f64 = 0.075;
pub const DEFAULT_TICKET_PRICE: u32 = 30;
pub const TICKET_PRICE_OPTIONS: [u32; 6] = [10, 20, 30, 50, 75, 100];

pub const STARTER_MAX_TICKETS: u32 = 500;
pub const STARTER_MONTHLY_FEE: u32 = 199;
pub const GROWTH_MAX_TICKETS: u32 = 5000;
pub const GROWTH_MONTHLY_FEE: u32 = 499;

/// Assumed monthly spend of an enterprise customer. Enterprise has no list
/// price, so savings are estimated against this figure and floored at
/// [`ENTERPRISE_MIN_SAVINGS`].
pub const ENTERPRISE_ESTIMATED_COST: f64 = 1500.0;
pub const ENTERPRISE_MIN_SAVINGS: u32 = 50;
pub const MAX_SAVINGS: u32 = 99;

pub const SAVINGS_TOOLTIP: &str = "Based on 7.5% industry average commission. Your savings may vary.";

// Contact
pub const CONTACT_ACKNOWLEDGMENT: &str = "Thank you for your message. We will be in touch shortly.";

/// Figures shown in the success section of the home page.
pub fn success_stats() -> Vec<CounterSpec> {
    vec![
        CounterSpec::new("Tickets sold", 250_000).with_suffix("+"),
        CounterSpec::new("Events hosted", 1_200),
        CounterSpec::new("Saved on fees", 1_800_000).with_prefix("€"),
        CounterSpec::new("Organizer satisfaction", 98).with_start(50).with_suffix("%"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_steps_are_strictly_increasing() {
        assert!(TICKET_STEPS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn defaults_point_at_real_options() {
        assert!(DEFAULT_STEP_INDEX < TICKET_STEPS.len());
        assert!(TICKET_PRICE_OPTIONS.contains(&DEFAULT_TICKET_PRICE));
    }

    #[test]
    fn tier_ceilings_match_ticket_steps() {
        assert!(TICKET_STEPS.contains(&STARTER_MAX_TICKETS));
        assert!(TICKET_STEPS.contains(&GROWTH_MAX_TICKETS));
    }
}
