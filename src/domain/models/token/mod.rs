pub mod token;

pub use token::{TokenRecord, TokenStatus};
