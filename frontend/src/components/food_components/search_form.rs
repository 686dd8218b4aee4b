//! Keyword search form for the food list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::routes::Route;


#[component]
pub fn FoodSearchForm(filter: ReadSignal<String>) -> Element {
    let mut keyword = use_signal(|| filter.read().clone());
    // when the url changes (the read signal given to us), we need to update the
    // local signal, as it is not reset by navigation.
    use_effect(move || {
        let current_filter = filter.read().clone();
        keyword.set(current_filter);
    });
    let keyword_has_changed = use_memo(move || *keyword.read() != *filter.read());
    let search_button_color = use_memo(move || if keyword_has_changed() { "#4F46E5" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        dioxus::logger::tracing::info!("searching food list for {:?}", keyword.read().clone());
        navigator().push(Route::food_list_with_filter(keyword.read().clone()));
    };
    let search_oninput = move |event: Event<FormData>| {
        keyword.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-food-search-form",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                margin-bottom: 16px;
                max-width: 420px;
                width: 100%;
            ",

            input {
                r#type: "text",
                aria_label: "Keyword",
                placeholder: "Search foods",
                style: "
                    flex: 1;
                    height: 40px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                    border-radius: 8px;
                    padding: 0 12px;
                    outline: none;
                    color: #111827;
                    font-size: 16px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{keyword.read()}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
            button {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    height: 40px;
                    padding: 0 14px;
                    border: none;
                    border-radius: 8px;
                    background-color: {search_button_color()};
                    color: white;
                    font-size: 16px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                "Search"
            }
        }
    }
}
