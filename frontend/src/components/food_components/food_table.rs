//! Food list data table and its column schema.

use common::food::Food;
use dioxus::prelude::*;

use crate::components::food_components::row_actions_menu::RowActionsMenu;

/// One column of the food table: a header and a cell formatter.
pub struct FoodColumn {
    pub header: &'static str,
    pub cell: fn(&Food) -> String,
}

/// The data columns in display order. The trailing actions column is not
/// part of the schema, it renders a dropdown instead of a text cell.
pub fn food_columns() -> [FoodColumn; 6] {
    [
        FoodColumn {
            header: "Name",
            cell: |food| food.name.clone(),
        },
        FoodColumn {
            header: "Energy",
            cell: |food| format!("{} kcal", food.energy),
        },
        FoodColumn {
            header: "Protein",
            cell: |food| format!("{} g", food.protein),
        },
        FoodColumn {
            header: "Fat",
            cell: |food| format!("{} g", food.fat),
        },
        FoodColumn {
            header: "Carbohydrate",
            cell: |food| format!("{} g", food.carbohydrate),
        },
        FoodColumn {
            header: "Amount",
            cell: |food| format!("per {} {}", food.amount, food.unit),
        },
    ]
}

#[component]
pub fn FoodTable(foods: Vec<Food>) -> Element {
    rsx! {
        table {
            id: "x-food-table",
            style: "
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 16px;
                font-size: 15px;
                color: #111827;
            ",
            thead {
                tr {
                    style: "border-bottom: 2px solid rgb(164, 164, 164); text-align: left;",
                    for column in food_columns() {
                        th {
                            style: "padding: 10px 12px; font-weight: 500;",
                            "{column.header}"
                        }
                    }
                    th {
                        style: "padding: 10px 12px; font-weight: 500;",
                        "Actions"
                    }
                }
            }
            tbody {
                for food in foods.iter() {
                    tr {
                        key: "{food.id}",
                        style: "border-bottom: 1px solid rgb(220, 220, 220);",
                        for column in food_columns() {
                            td {
                                style: "padding: 10px 12px;",
                                {(column.cell)(food)}
                            }
                        }
                        td {
                            style: "padding: 10px 12px;",
                            RowActionsMenu { food_id: food.id.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::food::sample_foods;

    fn cell(header: &str, food: &Food) -> String {
        let columns = food_columns();
        let column = columns
            .iter()
            .find(|c| c.header == header)
            .expect("column exists");
        (column.cell)(food)
    }

    #[test]
    fn column_headers_are_in_display_order() {
        let headers: Vec<&str> = food_columns().iter().map(|c| c.header).collect();
        assert_eq!(
            headers,
            vec!["Name", "Energy", "Protein", "Fat", "Carbohydrate", "Amount"]
        );
    }

    #[test]
    fn cells_format_with_units() {
        let foods = sample_foods();
        let apple = &foods[0];
        assert_eq!(cell("Name", apple), "Apple");
        assert_eq!(cell("Energy", apple), "52 kcal");
        assert_eq!(cell("Protein", apple), "0.26 g");
        assert_eq!(cell("Fat", apple), "0.17 g");
        assert_eq!(cell("Carbohydrate", apple), "14 g");
        assert_eq!(cell("Amount", apple), "per 100 g");
    }

    #[test]
    fn fractional_carbohydrate_keeps_its_precision() {
        let foods = sample_foods();
        let mandarin = &foods[2];
        assert_eq!(cell("Carbohydrate", mandarin), "9.8 g");
    }
}
