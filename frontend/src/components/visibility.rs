use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::{RevealState, VISIBILITY_THRESHOLD};

/// Stops observing when dropped.
pub trait VisibilityGuard {}

/// "Tell me once when this element is visible enough."
pub trait VisibilityTrigger {
    fn notify_once(
        &self,
        target: &Element,
        on_visible: Box<dyn FnOnce()>,
    ) -> Option<Box<dyn VisibilityGuard>>;
}

/// Browser implementation on top of `IntersectionObserver`.
pub struct IntersectionTrigger {
    pub threshold: f64,
}

impl Default for IntersectionTrigger {
    fn default() -> Self {
        Self {
            threshold: VISIBILITY_THRESHOLD,
        }
    }
}

struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityGuard for ObserverGuard {}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilityTrigger for IntersectionTrigger {
    fn notify_once(
        &self,
        target: &Element,
        on_visible: Box<dyn FnOnce()>,
    ) -> Option<Box<dyn VisibilityGuard>> {
        let latch = Rc::new(RefCell::new(RevealState::default()));
        let pending = Rc::new(RefCell::new(Some(on_visible)));

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let fraction = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                if latch.borrow_mut().observe(fraction) {
                    observer.disconnect();
                    if let Some(on_visible) = pending.borrow_mut().take() {
                        on_visible();
                    }
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(self.threshold));

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::error!("Failed to create IntersectionObserver: {:?}", e);
                return None;
            }
        };
        observer.observe(target);

        Some(Box::new(ObserverGuard {
            observer,
            _callback: callback,
        }))
    }
}

/// True from the first moment the referenced element is visible enough, for
/// the rest of this component's life. A remount starts over.
#[hook]
pub fn use_reveal_trigger(node: NodeRef, enabled: bool) -> bool {
    let triggered = use_state(|| false);

    {
        let triggered = triggered.clone();
        use_effect_with_deps(
            move |(node, enabled)| {
                let mut guard = None;
                if *enabled && !*triggered {
                    if let Some(element) = node.cast::<Element>() {
                        let setter = triggered.setter();
                        guard = IntersectionTrigger::default()
                            .notify_once(&element, Box::new(move || setter.set(true)));
                    }
                }
                move || drop(guard)
            },
            (node, enabled),
        );
    }

    *triggered
}
