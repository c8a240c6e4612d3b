// --- File: crates/dentify_api/src/lib.rs ---

// Declare modules within this crate
pub mod client; // HTTP client for the customer REST API
pub mod error; // Error handling
pub mod service; // AppointmentApi trait implementation

// Re-export the client and error types for easier access
pub use client::ClinicClient;
pub use error::ApiError;
