//! Cascading location options (pulau → provinsi → kota).
//!
//! The location table is embedded in the binary and loaded once. Options for
//! each dropdown level are derived from the labels currently selected at the
//! levels above it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/locations/islands` | List island labels |
//! | GET | `/api/locations/provinces?island=` | List province labels of an island |
//! | GET | `/api/locations/cities?island=&province=` | List city labels of a province |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::LocationService;
