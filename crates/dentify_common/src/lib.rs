// --- File: crates/dentify_common/src/lib.rs ---

// Declare modules within this crate
pub mod models; // Wire data structures shared across crates
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod services; // Service abstractions
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{
    config_error, internal_error, not_found, rejected, validation_error, Context, DentifyError,
    HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

// Re-export the service seam and the wire models it exchanges
pub use models::{
    ApiErrorBody, Appointment, AppointmentStatus, ContactChannel, CreateAppointmentRequest,
    RescheduleRequest, Slot,
};
pub use services::{AppointmentApi, BoxFuture};
