//! Toast notifications. The host renders whatever is on the `NoticeBoard`;
//! each toast schedules its own removal and plays a slide-out transition
//! first. Timers are independent, so several toasts can be up at once.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::state::notice::{Notice, NoticeBoard, NoticeRequest, EXIT_TRANSITION_MS};

pub enum NoticeAction {
    Push(NoticeRequest),
    Dismiss(u32),
}

impl Reducible for NoticeBoard {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: NoticeAction) -> Rc<Self> {
        match action {
            NoticeAction::Push(request) => Rc::new(self.push(request)),
            NoticeAction::Dismiss(id) => Rc::new(self.dismiss(id)),
        }
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let leaving = use_state(|| false);

    {
        let leaving = leaving.clone();
        let on_dismiss = props.on_dismiss.clone();
        let id = props.notice.id;
        // slide-out starts early so the toast is out of the document exactly
        // when its display window ends
        let exit_delay_ms = props.notice.exit_delay_ms();
        use_effect_with_deps(
            move |_| {
                Timeout::new(exit_delay_ms, move || {
                    leaving.set(true);
                    Timeout::new(EXIT_TRANSITION_MS, move || on_dismiss.emit(id)).forget();
                })
                .forget();
                || ()
            },
            (),
        );
    }

    let class = classes!(
        props.notice.severity.class(),
        (*leaving).then_some("toast-leaving")
    );

    html! {
        <div {class} role="status">
            <Icon name={props.notice.severity.icon()} class="toast-icon" />
            {
                if props.notice.lines.len() == 1 {
                    html! { <p class="toast-text">{ &props.notice.lines[0] }</p> }
                } else {
                    html! {
                        <ul class="toast-text">
                            { for props.notice.lines.iter().map(|line| html! {
                                <li>{ line }</li>
                            }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    html! {
        <div class="toast-stack">
            { for props.notices.iter().map(|notice| html! {
                <Toast
                    key={notice.id.to_string()}
                    notice={notice.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}
