//! 食品一覧ビュー
//!
//! マウント時に全件を1回取得し、以降はメモリ上のリストに対する
//! ページネーションのみ。追加はモーダル経由でAPIに送り、返ってきた
//! レコードをリスト末尾に反映する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use food_app_common::{FoodPageEvent, FoodPageState, LoadState};

use crate::api::foods::get_foods;
use crate::components::{
    add_food_modal::AddFoodModal, food_table::FoodTable, header::Header, pagination::Pagination,
};

#[component]
pub fn FoodPage() -> impl IntoView {
    let (state, set_state) = signal(FoodPageState::new());

    let dispatch = move |event: FoodPageEvent| {
        set_state.update(|s| *s = s.clone().apply(event));
    };

    // マウント時に1回だけ全件取得
    spawn_local(async move {
        match get_foods().await {
            Ok(foods) => dispatch(FoodPageEvent::FetchSucceeded(foods)),
            Err(e) => {
                web_sys::console::error_2(&JsValue::from_str("Error fetching foods:"), &e);
                dispatch(FoodPageEvent::FetchFailed);
            }
        }
    });

    view! {
        <div class="container">
            <Header />

            <Show when=move || state.with(|s| matches!(s.load, LoadState::Loading))>
                <p class="loading">"Loading food data..."</p>
            </Show>

            // 初回取得の失敗はリロードまで回復しない。テーブルは出さない
            <Show when=move || state.with(|s| matches!(s.load, LoadState::Failed))>
                <p class="error-message">
                    "Failed to load food data. Please try again later."
                </p>
            </Show>

            <Show when=move || state.with(|s| s.is_ready())>
                <button
                    class="btn btn-primary"
                    on:click=move |_| dispatch(FoodPageEvent::ModalOpened)
                >
                    "Add Food"
                </button>

                <FoodTable foods=Signal::derive(move || state.with(|s| s.visible_foods().to_vec())) />

                <Pagination
                    page_count=Signal::derive(move || state.with(|s| s.page_count()))
                    current_page=Signal::derive(move || state.with(|s| s.paginator.current_page))
                    on_page_change=move |page| dispatch(FoodPageEvent::PageChanged(page))
                />

                <Show when=move || state.with(|s| s.modal_open)>
                    <AddFoodModal
                        on_created=move |food| dispatch(FoodPageEvent::FoodCreated(food))
                        on_close=move |_| dispatch(FoodPageEvent::ModalClosed)
                    />
                </Show>
            </Show>
        </div>
    }
}
