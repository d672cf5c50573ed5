pub mod points;
pub mod validation;
