use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

// Browsers report the ratio at the crossing point with some rounding, so a
// section that just crossed 30% may come back as 0.2999.
const RATIO_TOLERANCE: f64 = 0.005;

/// Page-lifetime "already happened" flag. Lives in a `static` so it outlasts
/// the components that check it: a section mounted again after a route change
/// sees the flag its first mount consumed.
#[derive(Debug)]
pub struct OnceFlag(AtomicBool);

impl OnceFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn is_consumed(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Returns true for the first caller only.
    pub fn consume(&self) -> bool {
        !self.0.swap(true, Ordering::Relaxed)
    }
}

impl Default for OnceFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Set once the success counters have started animating.
pub static SUCCESS_COUNTERS_STARTED: OnceFlag = OnceFlag::new();

/// Fires at most once per `flag`: the first observation at or above
/// `threshold` consumes it, for this trigger and every later one sharing it.
#[derive(Debug)]
pub struct VisibilityTrigger {
    threshold: f64,
    flag: &'static OnceFlag,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64, flag: &'static OnceFlag) -> Self {
        Self { threshold, flag }
    }

    /// Returns true exactly once, for the first qualifying observation.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.flag.is_consumed() || !is_intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.flag.consume()
    }
}

/// An `IntersectionObserver` that calls back the first time its target is
/// visible enough and then disconnects itself. Dropping it disconnects too.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// Returns `None` without observing anything when `flag` is already
    /// consumed or the browser has no `IntersectionObserver`.
    pub fn observe_once<F>(target: &Element, threshold: f64, flag: &'static OnceFlag, on_visible: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        if flag.is_consumed() {
            debug!("Visibility trigger already consumed, not observing again");
            return None;
        }
        let mut trigger = VisibilityTrigger::new(threshold, flag);
        let mut on_visible = Some(on_visible);

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if trigger.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.unobserve(&entry.target());
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable, counters stay idle: {:?}", err);
                return None;
            }
        };
        observer.observe(target);
        debug!("Watching section for {}% visibility", threshold * 100.0);

        Some(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::{OnceFlag, VisibilityTrigger};

    #[test]
    fn fires_once_when_threshold_reached() {
        static FLAG: OnceFlag = OnceFlag::new();
        let mut trigger = VisibilityTrigger::new(0.3, &FLAG);
        assert!(trigger.observe(true, 0.3));
        assert!(!trigger.observe(true, 0.3));
        assert!(FLAG.is_consumed());
    }

    #[test]
    fn never_refires_on_reentry() {
        static FLAG: OnceFlag = OnceFlag::new();
        let mut trigger = VisibilityTrigger::new(0.3, &FLAG);
        assert!(trigger.observe(true, 0.8));
        assert!(!trigger.observe(false, 0.0));
        assert!(!trigger.observe(true, 0.5));
        assert!(!trigger.observe(true, 1.0));
    }

    #[test]
    fn remounted_section_does_not_fire_again() {
        static FLAG: OnceFlag = OnceFlag::new();
        let mut first_mount = VisibilityTrigger::new(0.3, &FLAG);
        assert!(first_mount.observe(true, 0.6));

        // Home -> Pricing -> Home builds a fresh trigger on the same page
        let mut second_mount = VisibilityTrigger::new(0.3, &FLAG);
        assert!(!second_mount.observe(true, 0.6));
        assert!(!second_mount.observe(true, 1.0));
    }

    #[test]
    fn ignores_shallow_or_absent_intersections() {
        static FLAG: OnceFlag = OnceFlag::new();
        let mut trigger = VisibilityTrigger::new(0.3, &FLAG);
        assert!(!trigger.observe(false, 0.0));
        assert!(!trigger.observe(true, 0.1));
        assert!(!trigger.observe(false, 0.4));
        assert!(!FLAG.is_consumed());
        assert!(trigger.observe(true, 0.35));
    }

    #[test]
    fn tolerates_rounding_at_the_crossing_point() {
        static FLAG: OnceFlag = OnceFlag::new();
        let mut trigger = VisibilityTrigger::new(0.3, &FLAG);
        assert!(trigger.observe(true, 0.2999));
    }

    #[test]
    fn flag_consumes_for_first_caller_only() {
        let flag = OnceFlag::new();
        assert!(!flag.is_consumed());
        assert!(flag.consume());
        assert!(!flag.consume());
        assert!(flag.is_consumed());
    }
}
