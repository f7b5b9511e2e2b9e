pub mod locations;
pub mod predictions;
