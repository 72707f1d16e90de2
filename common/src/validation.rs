//! フォーム検証
//!
//! 各フォームの入力値をスキーマ的に検証し、フィールド単位の
//! エラーメッセージを返す。検証に失敗した入力がネットワークに
//! 到達することはない（呼び出し側はis_valid()で送信をゲートする）。

use crate::types::{LoginInput, NewFood, RegisterInput};

/// パスワードの最小文字数
pub const MIN_PASSWORD_LEN: usize = 8;

/// 食品追加フォームのフィールドエラー
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodFormErrors {
    pub name: Option<String>,
    pub calories: Option<String>,
    pub food_type: Option<String>,
}

impl FoodFormErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.calories.is_none() && self.food_type.is_none()
    }
}

/// ログインフォームのフィールドエラー
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginFormErrors {
    pub fn is_valid(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// 登録フォームのフィールドエラー
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFormErrors {
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl RegisterFormErrors {
    pub fn is_valid(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

/// 食品追加フォームの検証
///
/// - name: 必須（トリム後に非空）
/// - calories: 正の数
/// - type: 必須（トリム後に非空）
pub fn validate_new_food(input: &NewFood) -> FoodFormErrors {
    let mut errors = FoodFormErrors::default();

    if input.name.trim().is_empty() {
        errors.name = Some("Please enter a food name.".to_string());
    }
    // NaNは比較が常にfalseになるのでここで弾かれる
    if !(input.calories > 0.0) {
        errors.calories = Some("Calories must be positive.".to_string());
    }
    if input.food_type.trim().is_empty() {
        errors.food_type = Some("Please enter a food type.".to_string());
    }

    errors
}

/// ログインフォームの検証（必須チェックのみ）
pub fn validate_login(input: &LoginInput) -> LoginFormErrors {
    let mut errors = LoginFormErrors::default();

    if input.username.trim().is_empty() {
        errors.username = Some("Username is required".to_string());
    }
    if input.password.is_empty() {
        errors.password = Some("Password is required".to_string());
    }

    errors
}

/// 登録フォームの検証
///
/// - username: 必須
/// - password: 必須かつ8文字以上
/// - confirm_password: 必須かつpasswordと一致
pub fn validate_register(input: &RegisterInput) -> RegisterFormErrors {
    let mut errors = RegisterFormErrors::default();

    if input.username.trim().is_empty() {
        errors.username = Some("Username is required".to_string());
    }
    if input.password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if input.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 8 characters".to_string());
    }
    if input.confirm_password.is_empty() {
        errors.confirm_password = Some("Confirm password is required".to_string());
    } else if input.confirm_password != input.password {
        errors.confirm_password = Some("Passwords must match".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_food() -> NewFood {
        NewFood {
            name: "Apple".to_string(),
            calories: 95.0,
            food_type: "Fruit".to_string(),
        }
    }

    #[test]
    fn test_validate_new_food_ok() {
        let errors = validate_new_food(&valid_food());
        assert!(errors.is_valid());
    }

    #[test]
    fn test_validate_new_food_empty_name() {
        let input = NewFood {
            name: String::new(),
            ..valid_food()
        };

        let errors = validate_new_food(&input);
        assert!(!errors.is_valid());
        assert_eq!(errors.name.as_deref(), Some("Please enter a food name."));
        assert!(errors.calories.is_none());
    }

    #[test]
    fn test_validate_new_food_whitespace_name() {
        let input = NewFood {
            name: "   ".to_string(),
            ..valid_food()
        };

        let errors = validate_new_food(&input);
        assert!(errors.name.is_some());
    }

    #[test]
    fn test_validate_new_food_zero_calories() {
        let input = NewFood {
            calories: 0.0,
            ..valid_food()
        };

        let errors = validate_new_food(&input);
        assert_eq!(errors.calories.as_deref(), Some("Calories must be positive."));
    }

    #[test]
    fn test_validate_new_food_negative_calories() {
        let input = NewFood {
            calories: -10.0,
            ..valid_food()
        };

        let errors = validate_new_food(&input);
        assert!(errors.calories.is_some());
    }

    #[test]
    fn test_validate_new_food_nan_calories() {
        // NaNとの比較は常にfalseなのでエラー扱いになる
        let input = NewFood {
            calories: f64::NAN,
            ..valid_food()
        };

        let errors = validate_new_food(&input);
        assert!(errors.calories.is_some());
    }

    #[test]
    fn test_validate_new_food_empty_type() {
        let input = NewFood {
            food_type: String::new(),
            ..valid_food()
        };

        let errors = validate_new_food(&input);
        assert_eq!(errors.food_type.as_deref(), Some("Please enter a food type."));
    }

    #[test]
    fn test_validate_login_ok() {
        let input = LoginInput {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };

        assert!(validate_login(&input).is_valid());
    }

    #[test]
    fn test_validate_login_empty_fields() {
        let errors = validate_login(&LoginInput::default());
        assert_eq!(errors.username.as_deref(), Some("Username is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
    }

    #[test]
    fn test_validate_register_ok() {
        let input = RegisterInput {
            username: "alice".to_string(),
            password: "longenough1".to_string(),
            confirm_password: "longenough1".to_string(),
        };

        assert!(validate_register(&input).is_valid());
    }

    #[test]
    fn test_validate_register_short_password() {
        // "short"は5文字なので最小文字数エラー
        let input = RegisterInput {
            username: "alice".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
        };

        let errors = validate_register(&input);
        assert!(!errors.is_valid());
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 8 characters")
        );
        // 一致はしているのでconfirm側はエラーなし
        assert!(errors.confirm_password.is_none());
    }

    #[test]
    fn test_validate_register_mismatch() {
        let input = RegisterInput {
            username: "alice".to_string(),
            password: "longenough1".to_string(),
            confirm_password: "different".to_string(),
        };

        let errors = validate_register(&input);
        assert!(!errors.is_valid());
        assert_eq!(errors.confirm_password.as_deref(), Some("Passwords must match"));
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_validate_register_empty_confirm() {
        let input = RegisterInput {
            username: "alice".to_string(),
            password: "longenough1".to_string(),
            confirm_password: String::new(),
        };

        let errors = validate_register(&input);
        assert_eq!(
            errors.confirm_password.as_deref(),
            Some("Confirm password is required")
        );
    }
}
