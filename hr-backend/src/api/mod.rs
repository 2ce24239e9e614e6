// src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::{jwt_auth_middleware, AuthMiddlewareConfig, ACCESS_TOKEN_COOKIE};
use crate::service::{
    auth_service::AuthService, dashboard_service::DashboardService,
    department_service::DepartmentService, employee_service::EmployeeService,
    skill_service::SkillService, training_data_service::TrainingDataService,
    training_plan_service::TrainingPlanService, training_service::TrainingService,
};
use crate::utils::jwt::JwtManager;
use crate::utils::password::PasswordManager;
use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

pub mod dto;
pub mod handlers;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub department_service: Arc<DepartmentService>,
    pub employee_service: Arc<EmployeeService>,
    pub skill_service: Arc<SkillService>,
    pub training_service: Arc<TrainingService>,
    pub training_plan_service: Arc<TrainingPlanService>,
    pub training_data_service: Arc<TrainingDataService>,
    pub dashboard_service: Arc<DashboardService>,
    pub db: DbPool,
    pub cookie_config: CookieConfig,
    pub config: Arc<AppConfig>,
}

/// Cookie設定
#[derive(Clone, Debug)]
pub struct CookieConfig {
    pub access_token_name: String,
    pub secure: bool,
    pub path: String,
}

impl CookieConfig {
    pub fn from_app_config(app_config: &AppConfig) -> Self {
        Self {
            access_token_name: ACCESS_TOKEN_COOKIE.to_string(),
            secure: app_config.security.cookie_secure,
            path: "/".to_string(),
        }
    }
}

impl AppState {
    pub fn new(db: DbPool, config: &AppConfig) -> AppResult<Self> {
        let jwt_manager = Arc::new(JwtManager::new(config.jwt.clone())?);
        let password_manager = Arc::new(PasswordManager::new(config.argon2.clone())?);

        Ok(Self {
            auth_service: Arc::new(AuthService::new(
                db.clone(),
                jwt_manager,
                password_manager,
                config.password_reset_redirect(),
            )),
            department_service: Arc::new(DepartmentService::new(db.clone())),
            employee_service: Arc::new(EmployeeService::new(db.clone())),
            skill_service: Arc::new(SkillService::new(db.clone())),
            training_service: Arc::new(TrainingService::new(db.clone())),
            training_plan_service: Arc::new(TrainingPlanService::new(db.clone())),
            training_data_service: Arc::new(TrainingDataService::new(db.clone())),
            dashboard_service: Arc::new(DashboardService::new(db.clone())),
            db,
            cookie_config: CookieConfig::from_app_config(config),
            config: Arc::new(config.clone()),
        })
    }
}

/// 許可オリジンから CORS レイヤーを作る。解釈できないオリジンは捨てる
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}

/// 全ルーターを束ね、認証とログのミドルウェアを掛ける
pub fn create_router(app_state: AppState) -> Router {
    let auth_config = AuthMiddlewareConfig::new(app_state.auth_service.clone());
    let cors = cors_layer(&app_state.config.cors_allowed_origins);

    Router::new()
        .merge(handlers::auth_handler::auth_router(app_state.clone()))
        .merge(handlers::department_handler::department_router(app_state.clone()))
        .merge(handlers::employee_handler::employee_router(app_state.clone()))
        .merge(handlers::skill_handler::skill_router(app_state.clone()))
        .merge(handlers::training_handler::training_router(app_state.clone()))
        .merge(handlers::training_plan_handler::training_plan_router(app_state.clone()))
        .merge(handlers::training_data_handler::training_data_router(app_state.clone()))
        .merge(handlers::dashboard_handler::dashboard_router(app_state.clone()))
        .merge(handlers::health_handler::health_router(app_state))
        .layer(axum_middleware::from_fn_with_state(
            auth_config,
            jwt_auth_middleware,
        ))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(axum_middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
