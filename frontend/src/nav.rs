use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::config;

/// Whether the navbar should carry the `scrolled` class. The threshold is
/// exclusive: sitting exactly on it still counts as the top of the page.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

/// Window `scroll` listener that reports `scrollY` on every event and
/// unregisters itself when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach<F>(mut on_scroll: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let window = web_sys::window()?;
        let reader = window.clone();

        let callback = Closure::wrap(Box::new(move || {
            on_scroll(reader.scroll_y().unwrap_or_default());
        }) as Box<dyn FnMut()>);

        if let Err(err) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            warn!("Could not listen for scroll events: {:?}", err);
            return None;
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::is_scrolled;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn top_of_page_is_not_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.5));
    }

    #[test]
    fn fractional_offsets_past_threshold_count() {
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(12_000.0));
    }
}
