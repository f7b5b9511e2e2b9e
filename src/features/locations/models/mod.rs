mod location;

pub use location::{LocationDataset, LOCATIONS};
