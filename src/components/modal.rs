//! Success overlay shown after a delivered contact message. While visible
//! it locks background scroll and listens for Escape; backdrop clicks and
//! the close button both dismiss it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub visible: bool,
    pub on_close: Callback<()>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |visible: &bool| -> Box<dyn FnOnce()> {
                if !*visible {
                    return Box::new(|| ());
                }
                let document = web_sys::window().and_then(|w| w.document());

                if let Some(body) = document.as_ref().and_then(|d| d.body()) {
                    let _ = body.style().set_property("overflow", "hidden");
                }

                let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                if let Some(doc) = &document {
                    let _ = doc.add_event_listener_with_callback(
                        "keydown",
                        on_key.as_ref().unchecked_ref(),
                    );
                }

                Box::new(move || {
                    if let Some(doc) = &document {
                        let _ = doc.remove_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        );
                        if let Some(body) = doc.body() {
                            let _ = body.style().remove_property("overflow");
                        }
                    }
                })
            },
            props.visible,
        );
    }

    if !props.visible {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Only clicks on the backdrop itself close the modal, not clicks that
    // bubble up from the card.
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class="modal-overlay" onclick={on_backdrop}>
            <div class="modal-card">
                <Icon name="check-circle" class="modal-icon" />
                <h3>{ "Pesan Terkirim!" }</h3>
                <p>{ "Terima kasih, pesan Anda telah kami terima. Kami akan segera menghubungi Anda." }</p>
                <button class="button button-primary" onclick={close}>{ "Tutup" }</button>
            </div>
        </div>
    }
}
