pub mod number;
pub mod validate;
