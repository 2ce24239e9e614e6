// src/console/app_shell.rs

use crate::session::SessionSnapshot;

/// 明示的な操作で切り替わる画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Auth,
    Dashboard,
}

/// 実際に表示する画面 (セッション状態を反映済み)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Home,
    Auth,
    Dashboard { username: String },
}

#[derive(Debug, Clone, Default)]
pub struct AppShell {
    screen: Screen,
    current_user: String,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// ホームの「ダッシュボードへ」
    pub fn enter_dashboard(&mut self) {
        if self.screen == Screen::Home {
            self.screen = Screen::Auth;
        }
    }

    pub fn auth_success(&mut self, username: impl Into<String>) {
        self.current_user = username.into();
        self.screen = Screen::Dashboard;
    }

    pub fn logout(&mut self) {
        self.current_user.clear();
        self.screen = Screen::Home;
    }

    /// セッションの状態を優先して表示画面を決める
    ///
    /// 読み込み中は `Loading`、サインイン済みなら常にダッシュボード。
    /// どちらでもなければ明示的に選ばれた画面。
    pub fn resolve(&self, snapshot: &SessionSnapshot) -> View {
        if snapshot.loading {
            return View::Loading;
        }
        if snapshot.user.is_some() {
            return View::Dashboard {
                username: snapshot.username(),
            };
        }
        match self.screen {
            Screen::Home => View::Home,
            Screen::Auth => View::Auth,
            Screen::Dashboard => View::Dashboard {
                username: self.current_user.clone(),
            },
        }
    }
}
