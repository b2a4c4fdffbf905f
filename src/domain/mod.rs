pub mod errors;
pub mod market;
