// --- File: crates/dentify_api/src/service.rs ---
//! Clinic API service implementation.
//!
//! This module wires `ClinicClient` into the `AppointmentApi` trait so the
//! booking flow and the appointments panel can run against any transport.

use chrono::NaiveDate;
use dentify_common::models::{Appointment, CreateAppointmentRequest, RescheduleRequest, Slot};
use dentify_common::services::{AppointmentApi, BoxFuture};

use crate::client::ClinicClient;
use crate::error::ApiError;

impl AppointmentApi for ClinicClient {
    type Error = ApiError;

    fn fetch_slots(&self, date: NaiveDate, service_id: i64) -> BoxFuture<'_, Vec<Slot>, ApiError> {
        Box::pin(async move { ClinicClient::fetch_slots(self, date, service_id).await })
    }

    fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> BoxFuture<'_, Appointment, ApiError> {
        Box::pin(async move { ClinicClient::create_appointment(self, &request).await })
    }

    fn list_appointments(&self) -> BoxFuture<'_, Vec<Appointment>, ApiError> {
        Box::pin(async move { ClinicClient::list_appointments(self).await })
    }

    fn fetch_appointment(&self, id: i64) -> BoxFuture<'_, Appointment, ApiError> {
        Box::pin(async move { ClinicClient::fetch_appointment(self, id).await })
    }

    fn confirm_appointment(&self, id: i64) -> BoxFuture<'_, Appointment, ApiError> {
        Box::pin(async move { ClinicClient::confirm_appointment(self, id).await })
    }

    fn check_in(&self, id: i64) -> BoxFuture<'_, Appointment, ApiError> {
        Box::pin(async move { ClinicClient::check_in(self, id).await })
    }

    fn cancel_appointment(&self, id: i64) -> BoxFuture<'_, Appointment, ApiError> {
        Box::pin(async move { ClinicClient::cancel_appointment(self, id).await })
    }

    fn reschedule_appointment(
        &self,
        id: i64,
        request: RescheduleRequest,
    ) -> BoxFuture<'_, Appointment, ApiError> {
        Box::pin(async move { ClinicClient::reschedule_appointment(self, id, &request).await })
    }
}
