pub mod food_table;
pub mod pagination;
pub mod row_actions_menu;
pub mod search_form;
