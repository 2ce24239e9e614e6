// src/service/mod.rs
pub mod auth_service;
pub mod dashboard_service;
pub mod department_service;
pub mod employee_service;
pub mod skill_service;
pub mod training_data_service;
pub mod training_plan_service;
pub mod training_service;
