// --- File: crates/dentify_common/src/services.rs ---
//! Service abstraction over the clinic's customer API.
//!
//! The booking flow and the appointments panel depend on this trait instead
//! of a concrete HTTP client, which keeps the state machines testable with
//! in-memory doubles and decouples them from transport details.

use chrono::NaiveDate;
use std::future::Future;
use std::pin::Pin;

use crate::models::{Appointment, CreateAppointmentRequest, RescheduleRequest, Slot};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Operations the customer API exposes to this client.
///
/// One method per consumed endpoint. Implementations must not retry:
/// every failure is terminal for the current user action.
pub trait AppointmentApi: Send + Sync {
    /// Error type returned by API operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the bookable slots for a date and service.
    fn fetch_slots(
        &self,
        date: NaiveDate,
        service_id: i64,
    ) -> BoxFuture<'_, Vec<Slot>, Self::Error>;

    /// Create an appointment from a chosen slot.
    fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> BoxFuture<'_, Appointment, Self::Error>;

    /// List the customer's appointments.
    fn list_appointments(&self) -> BoxFuture<'_, Vec<Appointment>, Self::Error>;

    /// Fetch one appointment by id.
    fn fetch_appointment(&self, id: i64) -> BoxFuture<'_, Appointment, Self::Error>;

    /// Confirm a pending appointment.
    fn confirm_appointment(&self, id: i64) -> BoxFuture<'_, Appointment, Self::Error>;

    /// Check in for a confirmed appointment scheduled today.
    fn check_in(&self, id: i64) -> BoxFuture<'_, Appointment, Self::Error>;

    /// Cancel an appointment.
    fn cancel_appointment(&self, id: i64) -> BoxFuture<'_, Appointment, Self::Error>;

    /// Move an appointment to a new date and start time.
    fn reschedule_appointment(
        &self,
        id: i64,
        request: RescheduleRequest,
    ) -> BoxFuture<'_, Appointment, Self::Error>;
}
