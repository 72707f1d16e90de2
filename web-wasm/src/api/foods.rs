//! Food API連携
//!
//! 固定ベースURLに対する2つの呼び出し:
//! - get_foods: 全食品の取得（GET /foods）
//! - create_food: 食品の作成（POST /foods）
//!
//! 非2xxとネットワーク障害はErrとして呼び出し側に返す。
//! リトライ・タイムアウト・キャンセルは行わない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use food_app_common::{Error, FoodItem, FoodsEnvelope, NewFood};

const API_BASE_URL: &str = "https://localhost:7124/api/v1";

/// fetch呼び出し（共通処理）
async fn fetch_json(method: &str, path: &str, body: Option<String>) -> Result<JsValue, JsValue> {
    let url = format!("{}{}", API_BASE_URL, path);

    let mut opts = RequestInit::new();
    opts.method(method);
    opts.mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.body(Some(&JsValue::from_str(&body)));
    }

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        let error = Error::Api {
            status: resp.status(),
        };
        return Err(JsValue::from_str(&error.to_string()));
    }

    JsFuture::from(resp.json()?).await
}

/// 全食品を取得する
///
/// レスポンスは `{ "data": { "value": [...] } }` 形状。
/// 境界でFoodsEnvelopeとして検証してから中身を返す。
pub async fn get_foods() -> Result<Vec<FoodItem>, JsValue> {
    let json = fetch_json("GET", "/foods", None).await?;
    let envelope: FoodsEnvelope = serde_wasm_bindgen::from_value(json)?;
    Ok(envelope.into_foods())
}

/// 食品を作成し、サーバー採番済みのレコードを返す
pub async fn create_food(new_food: &NewFood) -> Result<FoodItem, JsValue> {
    let body = serde_json::to_string(new_food)
        .map_err(|e| JsValue::from_str(&Error::Json(e).to_string()))?;
    let json = fetch_json("POST", "/foods", Some(body)).await?;
    let food: FoodItem = serde_wasm_bindgen::from_value(json)?;
    Ok(food)
}
