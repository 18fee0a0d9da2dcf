//! DOM Animation Utilities
//!
//! CSS-class "pulse" animations for plain DOM nodes.
//! A class is applied to start a keyframe animation and removed again
//! when the browser reports `animationend`.

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element};

/// Event fired by the browser when a CSS animation finishes
pub const ANIMATION_END: &str = "animationend";

/// Register `f` to run on the next `animationend` of `element`.
///
/// The listener is registered with `once: true` so the browser drops it
/// after the first call.
pub fn on_animation_end_once<F>(element: &Element, f: F)
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(move |_ev: web_sys::Event| f());
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
        ANIMATION_END,
        cb.unchecked_ref::<Function>(),
        &opts,
    );
}

/// Apply `class` to `element`, run `on_end` and drop the class once the animation ends
pub fn pulse_with<F>(element: &Element, class: &str, on_end: F)
where
    F: FnOnce() + 'static,
{
    let list = element.class_list();
    // Re-adding a class that is already present does not restart the animation.
    let _ = list.remove_1(class);
    // Reading layout forces a reflow between removal and re-add.
    let _ = element.client_width();
    let _ = list.add_1(class);

    let target = element.clone();
    let class = class.to_owned();
    on_animation_end_once(element, move || {
        let _ = target.class_list().remove_1(&class);
        on_end();
    });
}

/// Apply `class` to `element` and drop it once the animation ends
pub fn pulse(element: &Element, class: &str) {
    pulse_with(element, class, || {});
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let el = document.create_element("span").unwrap();
        el.set_class_name("counter");
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn test_pulse_adds_class_and_keeps_existing() {
        let el = fixture();
        pulse(&el, "color-anim");

        assert!(el.class_list().contains("color-anim"));
        assert!(el.class_list().contains("counter"));
    }

    #[wasm_bindgen_test]
    fn test_animation_end_removes_class() {
        let el = fixture();
        pulse(&el, "color-anim");

        let ev = web_sys::Event::new(ANIMATION_END).unwrap();
        el.dispatch_event(&ev).unwrap();

        assert!(!el.class_list().contains("color-anim"));
        assert!(el.class_list().contains("counter"));
    }

    #[wasm_bindgen_test]
    fn test_repeated_pulse_keeps_single_class() {
        let el = fixture();
        pulse(&el, "color-anim");
        pulse(&el, "color-anim");

        assert_eq!(el.class_list().length(), 2);
    }
}
