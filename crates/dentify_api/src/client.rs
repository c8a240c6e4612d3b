//! Clinic customer API client module
//!
//! This module provides a client for the customer-facing REST endpoints of
//! the clinic server: slot queries, appointment creation and the customer's
//! appointment list with its follow-up actions (confirm, check-in, cancel,
//! reschedule).
//!
//! The main component is the `ClinicClient` struct. It carries the session
//! cookie the way a browser would carry same-origin credentials and never
//! retries: every failure is terminal for the current user action.

use chrono::NaiveDate;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use dentify_common::http::client::{create_client, HTTP_CLIENT};
use dentify_common::models::{
    ApiErrorBody, Appointment, CreateAppointmentRequest, RescheduleRequest, Slot,
};
use dentify_config::ApiConfig;

use crate::error::ApiError;

/// Client for the clinic's customer REST API
///
/// One method per consumed endpoint, each returning the parsed wire model
/// or an `ApiError` classifying the failure (401, 404, rejection payload,
/// transport, parse).
///
/// Cloning is cheap: the underlying HTTP client shares its connection pool.
#[derive(Clone)]
pub struct ClinicClient {
    /// HTTP client used for all requests
    client: Client,

    /// Connection settings: base URL, session cookie, optional timeout
    config: ApiConfig,
}

impl ClinicClient {
    /// Creates a new clinic API client from the given configuration.
    ///
    /// A custom timeout in the configuration builds a dedicated client;
    /// otherwise the shared application client is reused.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dentify_api::client::ClinicClient;
    /// use dentify_config::ApiConfig;
    ///
    /// async fn list_today() -> Result<(), Box<dyn std::error::Error>> {
    ///     let config = ApiConfig {
    ///         base_url: "http://localhost:8080".to_string(),
    ///         session_cookie: Some("JSESSIONID=abc123".to_string()),
    ///         timeout_seconds: None,
    ///     };
    ///     let client = ClinicClient::new(config)?;
    ///     let appointments = client.list_appointments().await?;
    ///     for appointment in appointments {
    ///         println!("#{} {}", appointment.id, appointment.status.as_str());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::ConfigError(
                "Missing base_url in ApiConfig".to_string(),
            ));
        }
        let client = match config.timeout_seconds {
            Some(secs) => create_client(secs, true)?,
            None => HTTP_CLIENT.clone(),
        };
        Ok(Self { client, config })
    }

    /// Fetch the bookable slots for a date and service.
    ///
    /// Calls `GET /customer/slots?date=YYYY-MM-DD&serviceId=<id>` and returns
    /// the slots in server order. The caller is responsible for the
    /// client-side past-time re-filtering.
    pub async fn fetch_slots(
        &self,
        date: NaiveDate,
        service_id: i64,
    ) -> Result<Vec<Slot>, ApiError> {
        debug!("Fetching slots for {} (service {})", date, service_id);
        let response = self
            .get("/customer/slots")
            .query(&[
                ("date", date.format("%Y-%m-%d").to_string()),
                ("serviceId", service_id.to_string()),
            ])
            .send()
            .await?;
        read_json(response, "slots").await
    }

    /// Create an appointment from a chosen slot.
    ///
    /// Calls `POST /customer/appointments`. On success the server answers
    /// with the created appointment including its assigned id.
    pub async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        let response = self
            .post_json("/customer/appointments", request)
            .send()
            .await?;
        let appointment: Appointment = read_json(response, "appointment").await?;
        info!(
            "Created appointment {} for slot {}",
            appointment.id, request.slot_id
        );
        Ok(appointment)
    }

    /// List the customer's appointments, newest first per server ordering.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        debug!("Fetching appointment list");
        let response = self.get("/customer/appointments").send().await?;
        read_json(response, "appointments").await
    }

    /// Fetch one appointment by id. Answers `ApiError::NotFound` on 404.
    pub async fn fetch_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        debug!("Fetching appointment {}", id);
        let response = self
            .get(&format!("/customer/appointments/{}", id))
            .send()
            .await?;
        read_json(response, &format!("appointment {}", id)).await
    }

    /// Confirm a pending appointment.
    pub async fn confirm_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        let response = self
            .post(&format!("/customer/appointments/{}/confirm", id))
            .send()
            .await?;
        let appointment = read_json(response, &format!("appointment {}", id)).await?;
        info!("Confirmed appointment {}", id);
        Ok(appointment)
    }

    /// Check in for an appointment. The server only allows this for today's
    /// confirmed appointments; rejections carry a message to surface.
    pub async fn check_in(&self, id: i64) -> Result<Appointment, ApiError> {
        let response = self
            .post(&format!("/customer/appointments/{}/checkin", id))
            .send()
            .await?;
        let appointment = read_json(response, &format!("appointment {}", id)).await?;
        info!("Checked in appointment {}", id);
        Ok(appointment)
    }

    /// Cancel an appointment.
    pub async fn cancel_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        let response = self
            .post(&format!("/customer/appointments/{}/cancel", id))
            .send()
            .await?;
        let appointment = read_json(response, &format!("appointment {}", id)).await?;
        info!("Cancelled appointment {}", id);
        Ok(appointment)
    }

    /// Move an appointment to a new date and start time.
    pub async fn reschedule_appointment(
        &self,
        id: i64,
        request: &RescheduleRequest,
    ) -> Result<Appointment, ApiError> {
        let response = self
            .post_json(&format!("/customer/appointments/{}/reschedule", id), request)
            .send()
            .await?;
        let appointment = read_json(response, &format!("appointment {}", id)).await?;
        info!(
            "Rescheduled appointment {} to {} {}",
            id, request.selected_date, request.selected_time
        );
        Ok(appointment)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.with_session(self.client.get(self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.with_session(self.client.post(self.url(path)))
    }

    fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> RequestBuilder {
        self.post(path).json(body)
    }

    fn with_session(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.session_cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }
}

/// Classify a response and decode its body.
///
/// 401 maps to `Unauthenticated` before the body is read (the server sends
/// `{"error":"Not authenticated"}` but the status alone decides). Other
/// non-2xx responses are decoded as the server's error payload, preferring
/// its `message` over the machine `error` code, with the raw body as a
/// last resort.
async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, ApiError> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthenticated);
    }

    let text = response.text().await?;

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(what.to_string()));
    }

    if !status.is_success() {
        let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
        let message = match body.text() {
            Some(message) => message.to_string(),
            None if !text.trim().is_empty() => text.trim().to_string(),
            None => status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string(),
        };
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&text)?)
}
