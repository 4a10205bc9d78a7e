use crate::format::format_number;

/// Cubic ease-out: fast at the start, settling onto the end value.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Interpolated counter value for an animation `progress` in `[0, 1]`.
pub fn value_at(start: i64, end: i64, progress: f64) -> i64 {
    let eased = ease_out_cubic(progress);
    (start as f64 + (end - start) as f64 * eased).round() as i64
}

/// Where a counter is in its single run. A counter mounted after the page
/// already ran the animation starts out `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Running,
    Done,
}

impl CounterPhase {
    pub fn on_mount(already_started: bool) -> Self {
        if already_started {
            CounterPhase::Done
        } else {
            CounterPhase::Idle
        }
    }
}

/// One animated figure: counts from `start` to `target` and renders as
/// `prefix + formatted value + suffix`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub label: String,
    pub target: i64,
    pub start: i64,
    pub prefix: String,
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(label: impl Into<String>, target: i64) -> Self {
        Self {
            label: label.into(),
            target,
            start: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn with_start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn text_at(&self, progress: f64) -> String {
        let value = value_at(self.start, self.target, progress);
        format!("{}{}{}", self.prefix, format_number(value), self.suffix)
    }

    /// Text shown before the animation has been triggered.
    pub fn idle_text(&self) -> String {
        self.text_at(0.0)
    }

    /// Text for phases that need no animation frames, `None` while running.
    pub fn settled_text(&self, phase: CounterPhase) -> Option<String> {
        match phase {
            CounterPhase::Idle => Some(self.idle_text()),
            CounterPhase::Running => None,
            CounterPhase::Done => Some(self.text_at(1.0)),
        }
    }
}
