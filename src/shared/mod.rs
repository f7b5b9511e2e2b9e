pub mod constants;
pub mod currency;
pub mod types;
