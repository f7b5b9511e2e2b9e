//! House price prediction form.
//!
//! A form session holds the values of one house form, the cascading
//! dropdown options derived from them, and the last prediction outcome.
//! Submitting sends the form to the external prediction server; at most one
//! request per session is outstanding at a time.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/sessions` | Start an empty form session |
//! | GET | `/api/sessions/{id}` | Current form view |
//! | DELETE | `/api/sessions/{id}` | Discard a session |
//! | PATCH | `/api/sessions/{id}/fields` | Edit one field |
//! | POST | `/api/sessions/{id}/fields/{field}/step` | Increment/decrement a numeric field |
//! | POST | `/api/sessions/{id}/submit` | Request a prediction for the session |
//! | POST | `/api/predictions` | One-shot prediction for a complete form |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod workers;

pub use clients::{HttpPredictionClient, PredictionClient};
pub use services::{PredictionService, SessionService};
pub use workers::SessionSweeper;
