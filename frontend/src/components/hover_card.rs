//! Hover card tooltip used for icon buttons and navigation links.

use dioxus::prelude::*;
use dioxus_primitives::{ContentAlign, ContentSide};

#[derive(Clone, Copy)]
struct HoverCardState {
    is_open: Signal<bool>,
}

#[component]
pub fn HoverCard(children: Element) -> Element {
    let is_open = use_signal(|| false);
    use_context_provider(move || HoverCardState { is_open });
    rsx! {
        div {
            style: "position: relative; display: inline-block;",
            {children}
        }
    }
}

#[component]
pub fn HoverCardTrigger(children: Element) -> Element {
    let state = use_context::<HoverCardState>();
    let mut is_open = state.is_open;
    rsx! {
        div {
            onmouseenter: move |_| {
                is_open.set(true);
            },
            onmouseleave: move |_| {
                is_open.set(false);
            },
            {children}
        }
    }
}

#[component]
pub fn HoverCardContent(
    #[props(default = ContentSide::Bottom)] side: ContentSide,
    #[props(default = ContentAlign::Center)] align: ContentAlign,
    children: Element,
) -> Element {
    let state = use_context::<HoverCardState>();
    let is_open = state.is_open;

    let side_style = match side {
        ContentSide::Right => "left: 100%; top: 0; margin-left: 6px;",
        ContentSide::Left => "right: 100%; top: 0; margin-right: 6px;",
        ContentSide::Top => "bottom: 100%; left: 0; margin-bottom: 6px;",
        _ => "top: 100%; left: 0; margin-top: 6px;",
    };
    let align_style = match align {
        ContentAlign::Start => "text-align: start;",
        ContentAlign::End => "text-align: end;",
        _ => "text-align: center;",
    };

    rsx! {
        if *is_open.read() {
            div {
                style: "
                    position: absolute;
                    z-index: 1100;
                    white-space: nowrap;
                    {side_style}
                    {align_style}
                ",
                {children}
            }
        }
    }
}
