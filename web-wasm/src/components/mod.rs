//! UIコンポーネント

pub mod add_food_modal;
pub mod auth_page;
pub mod food_page;
pub mod food_table;
pub mod header;
pub mod login_form;
pub mod pagination;
pub mod register_form;
