pub mod domain;
pub mod ports;
pub mod services;
pub mod verification_use_cases;
