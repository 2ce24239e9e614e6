// src/config.rs
use std::env;
use tracing::warn;

use crate::utils::jwt::JwtConfig;
use crate::utils::password::Argon2Config;

#[derive(Clone, Debug)]
pub struct SecurityConfig {
    pub cookie_secure: bool,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub database_url: String,
    pub run_migrations: bool,
    /// パスワードリセットリンクのリダイレクト先の基点
    pub frontend_url: String,
    pub security: SecurityConfig,
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// `DATABASE_URL` と `JWT_SECRET` が無くても起動は止めない。
    /// 警告を出したうえで、実際の接続やトークン検証の時点で失敗させる。
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let is_production = environment == "production";

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            warn!("DATABASE_URL is not set; database calls will fail");
            String::new()
        });

        let jwt_secret = env::var("JWT_SECRET")
            .or_else(|_| env::var("JWT_SECRET_KEY"))
            .unwrap_or_else(|_| {
                warn!("JWT_SECRET is not set; using an ephemeral development secret");
                crate::utils::jwt::utils::generate_jwt_secret()
            });

        let jwt = JwtConfig {
            secret_key: jwt_secret,
            access_token_expiry_minutes: env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .map_err(|_| "Invalid JWT_ACCESS_TOKEN_EXPIRY_MINUTES value")?,
            refresh_token_expiry_days: env::var("JWT_REFRESH_TOKEN_EXPIRY_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .map_err(|_| "Invalid JWT_REFRESH_TOKEN_EXPIRY_DAYS value")?,
            ..JwtConfig::default()
        };

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            database_url,
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            security: SecurityConfig {
                cookie_secure: is_production,
            },
            jwt,
            argon2: Argon2Config::from_env(),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            database_url: "sqlite::memory:".to_string(),
            run_migrations: true,
            frontend_url: "http://localhost:3000".to_string(),
            security: SecurityConfig {
                cookie_secure: false,
            },
            jwt: JwtConfig {
                secret_key: "test-secret-key-that-is-at-least-32-characters-long".to_string(),
                ..JwtConfig::default()
            },
            // テストではハッシュ計算を軽くする
            argon2: Argon2Config {
                memory_cost: 1024,
                time_cost: 1,
                parallelism: 1,
                output_length: 32,
            },
        }
    }

    /// パスワードリセットメールに埋め込むデフォルトのリダイレクト先
    pub fn password_reset_redirect(&self) -> String {
        format!("{}/reset-password", self.frontend_url.trim_end_matches('/'))
    }
}

// Backward compatibility
pub type Config = AppConfig;
