//! 型定義
//!
//! フロントエンドとAPIの間でやり取りされる型:
//! - FoodItem: サーバーが管理する食品レコード
//! - NewFood: 作成リクエストのボディ
//! - FoodsEnvelope: GET /foods レスポンスのラッパー形状
//! - LoginInput / RegisterInput: 認証フォームの入力値（送信はしない）

use serde::{Deserialize, Serialize};

/// 食品レコード（idはサーバー採番）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: String,
    pub calories: f64,
    #[serde(rename = "type", default)]
    pub food_type: String,
}

/// POST /foods のリクエストボディ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub calories: f64,
    #[serde(rename = "type")]
    pub food_type: String,
}

/// GET /foods のレスポンス形状
///
/// APIは食品リストを `{ "data": { "value": [...] } }` に包んで返す。
/// 暗黙の `.data.value` アクセスではなく、境界で型として検証する。
#[derive(Debug, Clone, Deserialize)]
pub struct FoodsEnvelope {
    pub data: FoodsValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodsValue {
    pub value: Vec<FoodItem>,
}

impl FoodsEnvelope {
    /// ラッパーを剥がして食品リストを取り出す
    pub fn into_foods(self) -> Vec<FoodItem> {
        self.data.value
    }
}

/// ログインフォームの入力値（フォーム状態の寿命のみ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// 登録フォームの入力値（フォーム状態の寿命のみ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_item_serialize() {
        let food = FoodItem {
            id: 1,
            name: "Apple".to_string(),
            calories: 95.0,
            food_type: "Fruit".to_string(),
        };

        let json = serde_json::to_string(&food).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"name\":\"Apple\""));
        assert!(json.contains("\"calories\":95.0"));
        assert!(json.contains("\"type\":\"Fruit\""));
    }

    #[test]
    fn test_food_item_deserialize() {
        let json = r#"{"id": 42, "name": "Apple", "calories": 95, "type": "Fruit"}"#;

        let food: FoodItem = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(food.id, 42);
        assert_eq!(food.name, "Apple");
        assert_eq!(food.calories, 95.0);
        assert_eq!(food.food_type, "Fruit");
    }

    #[test]
    fn test_food_item_deserialize_missing_type() {
        // typeはPOSTボディでは省略可能なため、レコード側もデフォルトを許す
        let json = r#"{"id": 3, "name": "Bread", "calories": 250}"#;

        let food: FoodItem = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(food.name, "Bread");
        assert_eq!(food.food_type, ""); // デフォルト値
    }

    #[test]
    fn test_new_food_serialize() {
        let new_food = NewFood {
            name: "Banana".to_string(),
            calories: 105.0,
            food_type: "Fruit".to_string(),
        };

        let json = serde_json::to_string(&new_food).expect("シリアライズ失敗");
        assert!(json.contains("\"name\":\"Banana\""));
        assert!(json.contains("\"calories\":105.0"));
        assert!(json.contains("\"type\":\"Fruit\""));
        // idはサーバー採番のためボディに含まれない
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn test_foods_envelope_deserialize() {
        let json = r#"{
            "data": {
                "value": [
                    {"id": 1, "name": "Apple", "calories": 95, "type": "Fruit"},
                    {"id": 2, "name": "Rice", "calories": 206, "type": "Grain"}
                ]
            }
        }"#;

        let envelope: FoodsEnvelope = serde_json::from_str(json).expect("デシリアライズ失敗");
        let foods = envelope.into_foods();
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].name, "Apple");
        assert_eq!(foods[1].id, 2);
    }

    #[test]
    fn test_foods_envelope_deserialize_empty() {
        let json = r#"{"data": {"value": []}}"#;

        let envelope: FoodsEnvelope = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(envelope.into_foods().is_empty());
    }

    #[test]
    fn test_foods_envelope_rejects_flat_shape() {
        // ラッパーなしの素の配列は形状エラーとして弾く
        let json = r#"[{"id": 1, "name": "Apple", "calories": 95, "type": "Fruit"}]"#;

        let result = serde_json::from_str::<FoodsEnvelope>(json);
        assert!(result.is_err());
    }
}
