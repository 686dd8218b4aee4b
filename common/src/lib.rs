//! Common library exports shared across the Foodlog frontend.

extern crate serde;


pub mod food;
pub mod list_const;
