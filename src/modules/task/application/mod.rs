pub mod domain;
pub mod ports;
pub mod services;
pub mod task_use_cases;
