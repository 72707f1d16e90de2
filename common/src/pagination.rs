//! クライアントサイドページネーション
//!
//! 全件取得済みのリストに対する純粋なスライス計算。
//! ページ変更は再取得を伴わないローカルな状態更新のみ。

use std::ops::Range;

/// 1ページあたりのデフォルト表示件数
pub const DEFAULT_PER_PAGE: usize = 10;

/// 総ページ数 = ceil(total / per_page)
///
/// total == 0 のとき0を返す。per_pageは1以上であること。
pub fn page_count(total: usize, per_page: usize) -> usize {
    debug_assert!(per_page > 0);
    total.div_ceil(per_page)
}

/// ページk（1始まり）の表示範囲 [(k-1)*per_page, k*per_page) を
/// [0, total) にクランプして返す
///
/// 範囲外のページは空のRangeになる。
pub fn page_range(total: usize, per_page: usize, page: usize) -> Range<usize> {
    debug_assert!(per_page > 0);
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(per_page).min(total);
    let end = page.saturating_mul(per_page).min(total);
    start..end
}

/// ページネーション状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    pub per_page: usize,
    pub current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            current_page: 1,
        }
    }
}

impl Paginator {
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page,
            current_page: 1,
        }
    }

    /// 件数totalに対する総ページ数
    pub fn page_count(&self, total: usize) -> usize {
        page_count(total, self.per_page)
    }

    /// current_pageを [1, max(1, page_count)] に収める
    pub fn clamp_to(&mut self, total: usize) {
        let last = self.page_count(total).max(1);
        self.current_page = self.current_page.clamp(1, last);
    }

    /// 現在ページに表示する要素のスライス
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[page_range(items.len(), self.per_page, self.current_page)]
    }
}
