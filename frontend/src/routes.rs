use dioxus::prelude::*;

use crate::components::navbar::Navbar;

use crate::data_definitions::page_number::PageNumber;
use crate::pages::home_page::HomePage;
use crate::pages::food_list_page::FoodListPage;
use crate::pages::food_edit_page::FoodEditPage;
use crate::pages::food_delete_page::FoodDeletePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    // Missing or malformed query parameters fall back to page 1 and an
    // empty filter, see PageNumber.
    #[route("/foods?:page&:filter")]
    FoodListPage {
        page: PageNumber,
        filter: String,
    },


    #[route("/foods/:id/edit")]
    FoodEditPage { id: String },

    #[route("/foods/:id/delete")]
    FoodDeletePage { id: String },

}

impl Route {
    pub fn food_list_with_filter(filter: String) -> Self {
        Self::FoodListPage {
            page: PageNumber::default(),
            filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(url: &str) -> Route {
        Route::from_str(url).expect("route should parse")
    }

    #[test]
    fn food_list_without_query_uses_defaults() {
        match parse("/foods") {
            Route::FoodListPage { page, filter } => {
                assert_eq!(page, PageNumber::default());
                assert_eq!(page.get(), 1);
                assert_eq!(filter, "");
            }
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn food_list_reads_page_and_filter() {
        match parse("/foods?page=3&filter=apple") {
            Route::FoodListPage { page, filter } => {
                assert_eq!(page.get(), 3);
                assert_eq!(filter, "apple");
            }
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_page_falls_back_to_first_page() {
        match parse("/foods?page=abc&filter=banana") {
            Route::FoodListPage { page, filter } => {
                assert_eq!(page.get(), 1);
                assert_eq!(filter, "banana");
            }
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn filter_only_query_selects_first_page() {
        match parse("/foods?filter=apple") {
            Route::FoodListPage { page, filter } => {
                assert_eq!(page.get(), 1);
                assert_eq!(filter, "apple");
            }
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn food_list_route_serializes_query() {
        let url = Route::food_list_with_filter("apple".to_string()).to_string();
        assert!(url.starts_with("/foods?"), "unexpected url: {url}");
        assert!(url.contains("filter=apple"), "unexpected url: {url}");
        assert!(url.contains("page=1"), "unexpected url: {url}");
    }

    #[test]
    fn edit_and_delete_routes_carry_the_food_id() {
        match parse("/foods/2/edit") {
            Route::FoodEditPage { id } => assert_eq!(id, "2"),
            other => panic!("unexpected route: {other:?}"),
        }
        match parse("/foods/2/delete") {
            Route::FoodDeletePage { id } => assert_eq!(id, "2"),
            other => panic!("unexpected route: {other:?}"),
        }
    }
}
