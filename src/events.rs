//! Browser subscriptions owned by the component that needs them.
//!
//! Each handle removes its listener or disconnects its observer when dropped,
//! so returning it from an effect destructor is enough to tear it down on
//! unmount.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::config;

pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventSubscription {
    pub fn on_window<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let target: EventTarget = window()?.into();
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Calls `on_enter` the first time the element intersects the viewport.
pub struct InViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl InViewObserver {
    pub fn observe<F>(element: &Element, threshold: f64, on_enter: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut on_enter = Some(on_enter);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if entered {
                // Entrances play once.
                observer.disconnect();
                if let Some(on_enter) = on_enter.take() {
                    on_enter();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Becomes `true` once the referenced element has been on screen, and stays so.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_enter = visible.clone();
                    let observer = InViewObserver::observe(&element, config::REVEAL_THRESHOLD, move || {
                        on_enter.set(true)
                    });
                    if observer.is_none() {
                        // No observer support: show everything straight away.
                        visible.set(true);
                    }
                    observer
                });
                move || drop(observer)
            },
            node,
        );
    }

    *visible
}

#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = EventSubscription::on_window("scroll", move || {
                    if let Some(y) = window().and_then(|w| w.scroll_y().ok()) {
                        scrolled.set(y > threshold);
                    }
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *scrolled
}

/// Scrolls to the top on mount and whenever `deps` changes.
#[hook]
pub fn use_scroll_to_top<D>(deps: D)
where
    D: PartialEq + 'static,
{
    use_effect_with_deps(
        move |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        deps,
    );
}

/// Smooth-scrolls to the element with `id`; `false` if it is not on this page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
