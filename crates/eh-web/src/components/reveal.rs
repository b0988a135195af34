//! Scroll-triggered reveal backed by `IntersectionObserver`

use leptos::html;
use leptos::prelude::*;
use shared::{REVEAL_THRESHOLD, RevealState};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An observer and the callback it calls into. Dropping it disconnects.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    fn attach(target: &Element, state: RwSignal<RevealState>) -> Result<Self, JsValue> {
        let callback = ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            // The browser has already applied the threshold
            let intersecting = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .any(|entry| entry.is_intersecting());

            let mut next = state.get_untracked();
            if next.observe(intersecting) {
                state.set(next);
                // One-shot: nothing left to watch
                observer.disconnect();
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the element behind `target` has been scrolled into view.
/// Starts `false`, flips to `true` once and stays there.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let state = RwSignal::new(RevealState::default());
    // Owned by the component, so unmounting drops and disconnects it
    let observer = StoredValue::new_local(None::<RevealObserver>);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if state.get_untracked().is_revealed() {
            return;
        }

        match RevealObserver::attach(&element, state) {
            Ok(attached) => observer.set_value(Some(attached)),
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
                state.update(|s| {
                    s.force();
                });
            }
        }
    });

    Signal::derive(move || state.get().is_revealed())
}

/// Fades and lifts its children in the first time they scroll into view
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    /// Transition delay in milliseconds
    #[prop(optional)]
    delay: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref);

    let class = move || {
        let visibility = if revealed.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-3" };
        format!("transition-all duration-700 will-change-transform motion-reduce:transition-none {visibility} {class}")
    };

    view! {
        <div node_ref=node_ref style=format!("transition-delay: {delay}ms") class=class>
            {children()}
        </div>
    }
}
