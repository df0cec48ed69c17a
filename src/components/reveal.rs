//! Reveal-on-scroll wrapper. Children start transparent and shifted down,
//! then fade in the first time 10% of the wrapper crosses the viewport
//! (with a 50px bottom margin). The observer is released after the first
//! hit, which is what makes the animation one-shot.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::reveal::Reveal as RevealState;

const INTERSECTION_THRESHOLD: f64 = 0.1;
const INTERSECTION_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let state = use_state_eq(RevealState::default);
    let node = use_node_ref();

    {
        let state = state.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| -> Box<dyn FnOnce()> {
                let Some(element) = node.cast::<web_sys::Element>() else {
                    return Box::new(|| ());
                };

                let callback = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if entry.is_intersecting() {
                                state.set(state.on_intersect(true));
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));
                options.set_root_margin(INTERSECTION_ROOT_MARGIN);

                let observer = match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => observer,
                    Err(_) => return Box::new(|| ()),
                };
                observer.observe(&element);

                Box::new(move || {
                    observer.disconnect();
                    drop(callback);
                })
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={state.style()}>
            { for props.children.iter() }
        </div>
    }
}
