//! Per-row actions dropdown for the food table.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::{md_action_icons::MdDelete, md_image_icons::MdEdit, md_navigation_icons::MdMoreHoriz}};

use crate::routes::Route;

#[component]
pub fn RowActionsMenu(food_id: ReadSignal<String>) -> Element {
    let mut is_expanded = use_signal(|| false);
    rsx! {
        div {

            style: "",

            button {
                aria_label: "Open menu",
                style: "
                    width: 32px;
                    height: 32px;
                    cursor: pointer;
                    border: none;
                    border-radius: 8px;
                    background: transparent;
                    color: black;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1px;
                    margin: 1px;
                ",
                class: "foodlog-hover-shadow-background",
                onclick: move |_e| {
                    _e.prevent_default();
                    _e.stop_propagation();
                    *is_expanded.write() ^= true;
                },
                Icon {
                    icon: MdMoreHoriz,
                    style: "width: 20px; height: 20px;"
                }
            }

            if is_expanded() {
                div {
                    style: "
                    position: absolute;
                    top: 0px;
                    left: 0px;
                    width: 100vw;
                    height: 100vh;
                    padding: 0px;
                    margin: 0px;
                    overflow: hidden;
                    background: rgba(0, 0, 0, 0.05);
                    z-index: 1000;
                    ",
                    onclick: move |_e| {
                        _e.prevent_default();
                        _e.stop_propagation();
                        *is_expanded.write() = false;
                    },
                }
                div {
                    style: "
                    position: relative;
                    width: 0px;
                    height: 0px;
                    top: 0px;
                    left: 0px;
                    padding: 0px;
                    margin: 0px;
                    ",
                    div {
                        style: "
                        position: absolute;
                        right: 0px;
                        top: 4px;

                        width: 160px;
                        background-color: white;
                        border: 1px solid rgba(0, 0, 0, 0.5);
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.5);
                        border-radius: 4px;
                        padding: 5px;
                        margin: 2px;
                        gap: 5px;
                        z-index: 1001;
                        flex-direction: column;
                        display: flex;
                        font-size: 16px;
                        line-height: 24px;
                        ",

                        MenuItemLink {
                            to: Route::FoodEditPage { id: food_id.read().clone() },
                            label: "Edit",
                            icon: MdEdit,
                            on_navigate: move |_| {
                                *is_expanded.write() = false;
                            },
                        }
                        div {
                            style: "width: 100%; border-bottom: 1px solid rgba(0, 0, 0, 0.2);",
                        }
                        MenuItemLink {
                            to: Route::FoodDeletePage { id: food_id.read().clone() },
                            label: "Delete",
                            icon: MdDelete,
                            on_navigate: move |_| {
                                *is_expanded.write() = false;
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuItemLink<I: IconShape + Clone + PartialEq + 'static>(to: Route, label: String, icon: I, on_navigate: Callback<()>) -> Element {
    rsx! {
        Link {
            to: to,
            style: "
            padding: 2px;
            padding-left: 10px;
            margin: 2px;
            cursor: pointer;
            display: flex;
            flex-direction: row;
            align-items: center;
            gap: 10px;
            text-decoration: none;
            color: black;
            ",
            class: "foodlog-hover-shadow-background",
            onclick: move |_e| {
                on_navigate.call(());
            },

            Icon {
                icon: icon,
                style: "width: 18px; height: 18px;"
            }
            "{label}"
        }
    }
}
