//! 認証ビューの状態
//!
//! ログイン/登録の切り替えを文字列ではなく2値のenumで表現する。
//! 切り替えは状態の反転のみで副作用を持たない。

/// 表示中の認証サブフォーム
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

impl AuthView {
    /// ログイン <-> 登録 を反転する
    pub fn toggle(self) -> Self {
        match self {
            AuthView::Login => AuthView::Register,
            AuthView::Register => AuthView::Login,
        }
    }

    /// 切り替えリンクのラベル
    pub fn toggle_label(self) -> &'static str {
        match self {
            AuthView::Login => "Still not using Food App: REGISTER",
            AuthView::Register => "I have an account: LOG IN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_login() {
        assert_eq!(AuthView::default(), AuthView::Login);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(AuthView::Login.toggle(), AuthView::Register);
        assert_eq!(AuthView::Register.toggle(), AuthView::Login);
    }

    #[test]
    fn test_toggle_is_involution() {
        let view = AuthView::Login;
        assert_eq!(view.toggle().toggle(), view);
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(
            AuthView::Login.toggle_label(),
            "Still not using Food App: REGISTER"
        );
        assert_eq!(
            AuthView::Register.toggle_label(),
            "I have an account: LOG IN"
        );
    }
}
