//! The contact form. Validation and the submission state machine live in
//! `state::form`; this component wires them to the inputs, the outbox and
//! the success modal. A second submit while a delivery is in flight is
//! ignored.

use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::SuccessModal;
use crate::outbox::OutboxHandle;
use crate::state::form::{validate, ContactDraft, SubmitPhase};
use crate::state::notice::NoticeRequest;

const DELIVERY_FAILED_MESSAGE: &str =
    "Terjadi kesalahan saat mengirim pesan. Silakan coba lagi.";

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub notify: Callback<NoticeRequest>,
    #[prop_or_default]
    pub outbox: OutboxHandle,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);
    let phase = use_state_eq(|| SubmitPhase::Idle);
    let modal_open = use_state_eq(|| false);

    let edit = |apply: fn(&mut ContactDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };
    let edit_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.message = input.value();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let phase = phase.clone();
        let modal_open = modal_open.clone();
        let notify = props.notify.clone();
        let outbox = props.outbox.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !phase.can_submit() {
                log!("submit ignored, delivery already in progress");
                return;
            }

            phase.set(SubmitPhase::Validating);
            let values = (*draft).clone();
            if let Err(errors) = validate(&values) {
                notify.emit(NoticeRequest::report(
                    errors.iter().map(ToString::to_string).collect(),
                ));
                phase.set(SubmitPhase::Idle);
                return;
            }

            phase.set(SubmitPhase::Submitting);
            let delivery = outbox.deliver(values);
            let draft = draft.clone();
            let phase = phase.clone();
            let modal_open = modal_open.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match delivery.await {
                    Ok(()) => {
                        // Held at Succeeded until the modal is acknowledged.
                        phase.set(SubmitPhase::Succeeded);
                        modal_open.set(true);
                        draft.set(ContactDraft::default());
                    }
                    Err(err) => {
                        log::error!("contact delivery failed: {err}");
                        notify.emit(NoticeRequest::report(vec![DELIVERY_FAILED_MESSAGE.into()]));
                        phase.set(SubmitPhase::Idle);
                    }
                }
            });
        })
    };

    let close_modal = {
        let phase = phase.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_| {
            modal_open.set(false);
            phase.set(SubmitPhase::Idle);
        })
    };

    html! {
        <>
            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    <input
                        type="text"
                        name="name"
                        placeholder="Nama Lengkap"
                        value={draft.name.clone()}
                        oninput={edit(|d, v| d.name = v)}
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Alamat Email"
                        value={draft.email.clone()}
                        oninput={edit(|d, v| d.email = v)}
                    />
                </div>
                <input
                    type="text"
                    name="subject"
                    placeholder="Subjek"
                    value={draft.subject.clone()}
                    oninput={edit(|d, v| d.subject = v)}
                />
                <textarea
                    name="message"
                    rows="5"
                    placeholder="Tulis pesan Anda di sini..."
                    value={draft.message.clone()}
                    oninput={edit_message}
                />
                <button
                    type="submit"
                    class="button button-primary"
                    disabled={phase.in_flight()}
                >
                    { phase.submit_label() }
                </button>
            </form>
            <SuccessModal visible={*modal_open} on_close={close_modal} />
        </>
    }
}
