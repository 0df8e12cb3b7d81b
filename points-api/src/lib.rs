//! Receipt Points API Server
//!
//! Serves the receipt points HTTP contract over the core scoring engine
//! and score store.
//!
//! ## Endpoints
//!
//! - POST /receipts/process - Score a receipt, returns its identifier
//! - GET /receipts/:id/points - Points awarded to a processed receipt
//! - GET /health - Service liveness

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use routes::*;
pub use server::*;
pub use state::*;
