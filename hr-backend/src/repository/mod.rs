// src/repository/mod.rs
pub mod department_repository;
pub mod employee_repository;
pub mod employee_skill_repository;
pub mod skill_repository;

pub mod training_data_repository;
pub mod training_plan_repository;
pub mod training_repository;

pub mod auth_session_repository;
pub mod password_reset_token_repository;
pub mod user_repository;
