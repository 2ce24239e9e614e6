// src/api/dto/mod.rs
pub mod auth_dto;
pub mod common;
pub mod dashboard_dto;
pub mod department_dto;
pub mod employee_dto;
pub mod skill_dto;
pub mod training_data_dto;
pub mod training_dto;
pub mod training_plan_dto;

pub use common::OperationResult;
