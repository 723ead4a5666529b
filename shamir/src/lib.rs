//! Shamir's Secret Sharing over GF(p): split a secret into `n` shares so
//! that any `t` of them reconstruct it exactly and fewer reveal nothing.

pub mod encoder;
pub mod error;
pub mod interpolate;
pub mod scheme;
pub mod share;

pub use error::{Result, ShamirError};
pub use scheme::Shamir;
pub use share::Share;
