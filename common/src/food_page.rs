//! 食品一覧ビューの状態遷移
//!
//! (state, event) -> state の純粋な遷移として表現し、
//! レンダリング層から独立してテストできるようにする。

use crate::pagination::Paginator;
use crate::types::FoodItem;

/// 初回取得の状態
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// 取得中（ローディング表示）
    Loading,
    /// 取得失敗（リロードまで回復しない）
    Failed,
    /// 取得済みの食品リスト（クライアント側からは追記のみ）
    Loaded(Vec<FoodItem>),
}

/// 食品一覧ビューの状態
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPageState {
    pub load: LoadState,
    pub paginator: Paginator,
    pub modal_open: bool,
}

/// 食品一覧ビューのイベント
#[derive(Debug, Clone, PartialEq)]
pub enum FoodPageEvent {
    FetchSucceeded(Vec<FoodItem>),
    FetchFailed,
    PageChanged(usize),
    ModalOpened,
    ModalClosed,
    /// サーバーが返した作成済みレコードをリストに追加する
    FoodCreated(FoodItem),
}

impl Default for FoodPageState {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
            paginator: Paginator::default(),
            modal_open: false,
        }
    }
}

impl FoodPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを適用して次の状態に遷移する
    pub fn apply(mut self, event: FoodPageEvent) -> Self {
        match event {
            FoodPageEvent::FetchSucceeded(foods) => {
                self.load = LoadState::Loaded(foods);
            }
            FoodPageEvent::FetchFailed => {
                self.load = LoadState::Failed;
            }
            FoodPageEvent::PageChanged(page) => {
                self.paginator.current_page = page;
                self.paginator.clamp_to(self.total());
            }
            FoodPageEvent::ModalOpened => {
                self.modal_open = true;
            }
            FoodPageEvent::ModalClosed => {
                self.modal_open = false;
            }
            FoodPageEvent::FoodCreated(food) => {
                if let LoadState::Loaded(foods) = &mut self.load {
                    foods.push(food);
                }
                self.modal_open = false;
            }
        }
        self
    }

    /// 取得済みの食品リスト（未取得・失敗時はNone）
    pub fn foods(&self) -> Option<&[FoodItem]> {
        match &self.load {
            LoadState::Loaded(foods) => Some(foods),
            _ => None,
        }
    }

    /// 現在ページに表示する食品
    pub fn visible_foods(&self) -> &[FoodItem] {
        self.foods()
            .map(|foods| self.paginator.slice(foods))
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.foods().map_or(0, |foods| foods.len())
    }

    pub fn page_count(&self) -> usize {
        self.paginator.page_count(self.total())
    }

    /// テーブルとページネーションを表示してよいか
    pub fn is_ready(&self) -> bool {
        matches!(self.load, LoadState::Loaded(_))
    }
}
