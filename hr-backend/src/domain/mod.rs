// src/domain/mod.rs

// 組織・社員・スキル
pub mod department_model;
pub mod employee_model;
pub mod employee_skill_model;
pub mod skill_catalog;
pub mod skill_level;
pub mod skill_model;

// 研修
pub mod month;
pub mod training_data_model;
pub mod training_model;
pub mod training_participant_model;
pub mod training_plan_model;
pub mod training_type;

// 認証
pub mod auth_session_model;
pub mod password_reset_token_model;
pub mod user_model;
