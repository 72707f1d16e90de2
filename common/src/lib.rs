//! Food App Common Library
//!
//! Leptosフロントエンドから利用される共有ロジック:
//! - 型定義（FoodItem / フォーム入力）
//! - クライアントサイドページネーション
//! - フォーム検証
//! - 各ビューの純粋な状態遷移

pub mod types;
pub mod pagination;
pub mod validation;
pub mod food_page;
pub mod auth_page;
pub mod error;

pub use types::{FoodItem, FoodsEnvelope, LoginInput, NewFood, RegisterInput};
pub use pagination::{page_count, page_range, Paginator};
pub use validation::{
    validate_login, validate_new_food, validate_register, FoodFormErrors, LoginFormErrors,
    RegisterFormErrors,
};
pub use food_page::{FoodPageEvent, FoodPageState, LoadState};
pub use auth_page::AuthView;
pub use error::{Error, Result};
