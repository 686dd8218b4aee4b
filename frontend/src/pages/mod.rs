pub mod food_delete_page;
pub mod food_edit_page;
pub mod food_list_page;
pub mod home_page;
