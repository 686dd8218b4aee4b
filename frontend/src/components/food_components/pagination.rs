//! Pagination strip for the food list.
//!
//! The numbered links are the static placeholder set from the sample data;
//! no row slicing happens yet. Links keep the current filter so switching
//! pages never drops the search term.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};
use dioxus_primitives::{ContentAlign, ContentSide};

use crate::components::hover_card::{HoverCard, HoverCardContent, HoverCardTrigger};
use crate::data_definitions::page_number::PageNumber;
use crate::routes::Route;

/// Placeholder page links shown in the strip.
const PAGE_LINKS: [u64; 3] = [1, 2, 3];

#[component]
pub fn FoodListPagination(page: ReadSignal<PageNumber>, filter: ReadSignal<String>) -> Element {
    let can_go_to_previous_page = use_memo(move || !page.read().is_first());

    let go_to_page = Callback::new(move |target: PageNumber| {
        navigator().push(Route::FoodListPage {
            page: target,
            filter: filter.read().clone(),
        });
    });

    rsx! {
        nav {
            id: "x-food-list-pagination",
            aria_label: "Pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                margin-bottom: 16px;
            ",

            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| {
                    go_to_page(page.read().previous());
                }
            }

            for target in PAGE_LINKS {
                PageLink { target: PageNumber::new(target), page, filter }
            }

            span {
                aria_hidden: "true",
                style: "color: #6B7280; padding: 0 4px;",
                "…"
            }

            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: false,
                onclick: move |_| {
                    go_to_page(page.read().next());
                }
            }
        }
    }
}

#[component]
fn PageLink(target: PageNumber, page: ReadSignal<PageNumber>, filter: ReadSignal<String>) -> Element {
    let is_active = use_memo(move || *page.read() == target);
    let link_style = use_memo(move || {
        if is_active() {
            "background-color: #1C212D; color: white;"
        } else {
            "background-color: white; color: #111827;"
        }
    });
    rsx! {
        Link {
            to: Route::FoodListPage {
                page: target,
                filter: filter.read().clone(),
            },
            aria_current: if is_active() { "page" } else { "false" },
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 32px;
                height: 32px;
                border-radius: 8px;
                border: 1px solid rgba(0,0,0,0.1);
                text-decoration: none;
                font-size: 15px;
                {link_style()}
            ",
            "{target}"
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    // reading the signal here subscribes the whole button to it
    let is_disabled = *disabled.read();
    let (btn_color, btn_cursor) = if is_disabled {
        ("rgba(0,0,0,0.3)", "not-allowed")
    } else {
        ("rgba(0,0,0,1)", "pointer")
    };
    rsx! {
        HoverCard {
            HoverCardTrigger {
                button {
                    disabled: is_disabled,
                    style: "
                        width: 32px;
                        height: 32px;
                        background: white;
                        border-radius: 8px;
                        padding: 4px;
                        box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                        cursor: {btn_cursor};
                    ",
                    onclick: move |_| {
                        if !*disabled.read() {
                            onclick(());
                        }
                    },
                    Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
                },

            },
            HoverCardContent {
                side: ContentSide::Bottom,
                align: ContentAlign::Center,
                div {
                    style: "
                        color:{btn_color};
                        background-color:white;
                        padding:10px;
                        border-radius:5px;
                        border: 1px solid black;
                        width: fit-content;
                    ",
                    "{label}",
                }
            }
        }
    }
}
