pub mod breadcrumb;
pub mod error_boundary;
pub mod food_components;
pub mod hover_card;
pub mod navbar;
