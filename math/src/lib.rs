pub mod error;
pub mod field;

pub use error::MathError;
pub use field::{invert, mul_mod, reduce, sub_mod};
