use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config;

struct RevealBinding {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)>,
}

thread_local! {
    static REVEAL_BINDING: RefCell<Option<RevealBinding>> = const { RefCell::new(None) };
}

/// Mark every `.section` with the reveal class once it scrolls into view.
pub(crate) fn observe_sections() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    REVEAL_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            old.observer.disconnect();
        }
    });

    let callback = Closure::<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if target.class_list().add_1(config::REVEAL_CLASS).is_err() {
                    continue;
                }
                let name = match target.id() {
                    id if id.is_empty() => target.class_name(),
                    id => id,
                };
                web_sys::console::info_1(&format!("📍 Section visible: {name}").into());
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    let observer = match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            web_sys::console::warn_1(&format!("IntersectionObserver unavailable: {e:?}").into());
            return;
        }
    };

    if let Ok(sections) = document.query_selector_all(".section") {
        for i in 0..sections.length() {
            if let Some(section) = sections
                .item(i)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                observer.observe(&section);
            }
        }
    }

    REVEAL_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(RevealBinding {
            observer,
            _callback: callback,
        });
    });
}
