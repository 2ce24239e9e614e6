// tests/integration/mod.rs

pub mod auth_tests;
pub mod dashboard_tests;
pub mod department_tests;
pub mod employee_tests;
pub mod session_tests;
pub mod skill_tests;
pub mod training_data_tests;
pub mod training_plan_tests;
pub mod training_tests;
