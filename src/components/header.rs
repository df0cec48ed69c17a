//! Fixed page header: logo, section nav, burger menu for small screens.
//! One throttled window scroll listener drives both the header's solid
//! treatment and the active-link highlight.

use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::state::menu::MenuState;
use crate::state::scroll::{self, SectionBounds};
use crate::{actions, config, utils};

fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Reads the current top offsets of the configured sections; sections
/// missing from the document are skipped.
fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    config::SECTIONS
        .iter()
        .filter_map(|&(id, _)| {
            let element: HtmlElement = document.get_element_by_id(id)?.dyn_into().ok()?;
            Some(SectionBounds {
                id: id.to_string(),
                top: f64::from(element.offset_top()),
            })
        })
        .collect()
}

/// Smoothly scrolls a section into view, leaving room for the fixed header.
fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let Ok(element) = element.dyn_into::<HtmlElement>() else {
        return;
    };
    let top = f64::from(element.offset_top()) - scroll::ANCHOR_SCROLL_MARGIN;
    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state(MenuState::default);
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| -> Box<dyn FnOnce()> {
                let Some(window) = web_sys::window() else {
                    return Box::new(|| ());
                };
                let handler = utils::throttle(
                    move || {
                        let y = window_scroll_y();
                        scrolled.set(scroll::header_scrolled(y));
                        let sections = measure_sections();
                        active.set(scroll::active_section(&sections, y).map(str::to_string));
                    },
                    config::SCROLL_THROTTLE_MS,
                );
                let listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
                if window
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("failed to attach scroll listener");
                }
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                })
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggle()))
    };

    // Following any nav link also closes the mobile panel.
    let nav_to = {
        let menu = menu.clone();
        move |id: &'static str| {
            let menu = menu.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(id);
                actions::track_event("nav_click", json!({ "section": id }));
                menu.set(menu.close());
            })
        }
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let class = classes!(
            "nav-link",
            (active.as_deref() == Some(id)).then_some("active")
        );
        html! {
            <a href={format!("#{id}")} {class} onclick={nav_to(id)}>{ label }</a>
        }
    };

    html! {
        <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <div class="header-inner">
                <a class="logo" href="#beranda" onclick={nav_to("beranda")}>
                    { "GPIB Sejahtera" }
                </a>
                <nav class="desktop-nav">
                    { for config::SECTIONS.iter().map(|&(id, label)| nav_link(id, label)) }
                </nav>
                <button class="burger" aria-label="Menu" onclick={toggle_menu}>
                    <Icon name={menu.icon()} />
                </button>
            </div>
            <nav class={menu.panel_class()}>
                { for config::SECTIONS.iter().map(|&(id, label)| nav_link(id, label)) }
            </nav>
        </header>
    }
}
