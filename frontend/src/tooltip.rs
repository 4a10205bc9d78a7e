use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::Element;

/// Attaches a Bootstrap tooltip to `element` when `window.bootstrap` has been
/// loaded by the page. Without it the native `title` tooltip is all we get.
pub fn init_tooltip(element: &Element) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let constructor = Reflect::get(&window, &JsValue::from_str("bootstrap"))
        .ok()
        .filter(|bootstrap| bootstrap.is_object())
        .and_then(|bootstrap| Reflect::get(&bootstrap, &JsValue::from_str("Tooltip")).ok())
        .filter(|tooltip| tooltip.is_function());

    let Some(constructor) = constructor else {
        debug!("Bootstrap tooltip not loaded, keeping plain title attribute");
        return;
    };

    let constructor: Function = constructor.unchecked_into();
    if let Err(err) = Reflect::construct(&constructor, &Array::of1(element)) {
        debug!("Bootstrap tooltip init failed: {:?}", err);
    }
}
