//! Food list page: breadcrumbs, search form, data table and pagination.

use common::food::sample_foods;
use dioxus::prelude::*;

use crate::components::breadcrumb::{Breadcrumb, Crumb};
use crate::components::error_boundary::ComponentErrorBoundary;
use crate::components::food_components::food_table::FoodTable;
use crate::components::food_components::pagination::FoodListPagination;
use crate::components::food_components::search_form::FoodSearchForm;
use crate::data_definitions::page_number::PageNumber;
use crate::routes::Route;


/// Food list page
#[component]
pub fn FoodListPage(page: PageNumber, filter: String) -> Element {
    rsx! {
        Title { "Foodlog - Food List" }
        FoodListRootComponent { page, filter }
    }
}

#[component]
fn FoodListRootComponent(page: ReadSignal<PageNumber>, filter: ReadSignal<String>) -> Element {
    rsx! {
        main {
            id: "x-food-list-root-component",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
                padding: 0 24px;
                box-sizing: border-box;
                overflow: auto;
                background-color: #F5F6F8;
            ",

            Breadcrumb {
                crumbs: vec![
                    Crumb::link("Home", Route::HomePage {}),
                    Crumb::current("Food List"),
                ],
            }

            h1 {
                style: "margin: 0 0 16px 0; font-size: 22px; font-weight: 500; color: #0F172A;",
                "Food List"
            }

            nav {
                aria_label: "Actions",
                style: "margin-bottom: 16px;",
                Link {
                    to: Route::HomePage {},
                    style: "
                        display: inline-flex;
                        align-items: center;
                        height: 36px;
                        padding: 0 14px;
                        border: 1px solid #D1D5DB;
                        border-radius: 8px;
                        background: white;
                        color: #111827;
                        font-size: 15px;
                        text-decoration: none;
                    ",
                    "Back"
                }
            }

            FoodSearchForm { filter }

            ComponentErrorBoundary {
                FoodTable { foods: sample_foods() }
            }

            FoodListPagination { page, filter }
        }
    }
}
