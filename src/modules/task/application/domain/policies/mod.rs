pub mod gender_safety;

pub use gender_safety::check_gender_safety_rule;
