//! Delete destination for the food list row actions.

use dioxus::prelude::*;

use crate::components::breadcrumb::{Breadcrumb, Crumb};
use crate::routes::Route;


/// Food delete page. Deletion is not wired up yet, this page only anchors
/// the `{id}/delete` links from the list view.
#[component]
pub fn FoodDeletePage(id: String) -> Element {
    rsx! {
        Title { "Foodlog - Delete Food" }
        main {
            style: "padding: 0 24px;",
            Breadcrumb {
                crumbs: vec![
                    Crumb::link("Home", Route::HomePage {}),
                    Crumb::link("Food List", Route::food_list_with_filter(String::new())),
                    Crumb::current("Delete"),
                ],
            }
            h1 {
                style: "font-size: 22px; font-weight: 500; color: #0F172A;",
                "Delete food #{id}"
            }
        }
    }
}
