// --- File: crates/dentify_booking/src/appointments.rs ---

//! Customer appointments panel: the list, one opened detail and the
//! actions a customer can take on an appointment.

use crate::display;
use chrono::NaiveDate;
use dentify_common::{Appointment, AppointmentApi, DentifyError, RescheduleRequest};
use tracing::{info, warn};

/// Extracts the appointment id from a `#highlight=<id>` URL fragment.
///
/// The marker may sit anywhere in the fragment; the digits following it
/// form the id.
pub fn parse_highlight_fragment(fragment: &str) -> Option<i64> {
    let start = fragment.find("highlight=")? + "highlight=".len();
    let digits: String = fragment[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// State behind the "Lịch hẹn của tôi" page.
pub struct AppointmentsPanel<A> {
    api: A,
    appointments: Vec<Appointment>,
    detail: Option<Appointment>,
    highlight: Option<i64>,
    notice: Option<String>,
}

impl<A> AppointmentsPanel<A>
where
    A: AppointmentApi,
    DentifyError: From<A::Error>,
{
    pub fn new(api: A) -> Self {
        AppointmentsPanel {
            api,
            appointments: Vec::new(),
            detail: None,
            highlight: None,
            notice: None,
        }
    }

    /// Appointments in the order the server returned them.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn detail(&self) -> Option<&Appointment> {
        self.detail.as_ref()
    }

    /// Id of the entry a deep link asked to highlight.
    pub fn highlight(&self) -> Option<i64> {
        self.highlight
    }

    /// Remembers which appointment a `#highlight=<id>` link pointed at.
    pub fn set_highlight_from_fragment(&mut self, fragment: &str) {
        self.highlight = parse_highlight_fragment(fragment);
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Takes the pending notice, clearing it.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Reloads the appointment list. A 401 raises "Bạn cần đăng nhập để
    /// xem lịch hẹn.", any other failure "Không thể tải danh sách lịch
    /// hẹn."; the previous list is kept on failure.
    pub async fn load(&mut self) -> Result<(), DentifyError> {
        match self.api.list_appointments().await {
            Ok(appointments) => {
                self.appointments = appointments;
                self.notice = None;
                Ok(())
            }
            Err(error) => {
                let error = DentifyError::from(error);
                warn!("Appointment list load failed: {}", error);
                self.notice = Some(match &error {
                    DentifyError::AuthError(_) => display::LOGIN_REQUIRED_APPOINTMENTS.to_string(),
                    _ => display::APPOINTMENTS_LOAD_FAILED.to_string(),
                });
                Err(error)
            }
        }
    }

    /// Opens the detail view for one appointment.
    ///
    /// An appointment that has vanished (404) leaves the panel silently
    /// empty; a 401 raises the login notice; anything else "Không thể tải
    /// chi tiết.".
    pub async fn open_detail(&mut self, id: i64) -> Result<Appointment, DentifyError> {
        match self.api.fetch_appointment(id).await {
            Ok(appointment) => {
                self.detail = Some(appointment.clone());
                Ok(appointment)
            }
            Err(error) => {
                let error = DentifyError::from(error);
                match &error {
                    DentifyError::NotFoundError(_) => {}
                    DentifyError::AuthError(_) => {
                        self.notice = Some(display::LOGIN_REQUIRED.to_string())
                    }
                    _ => self.notice = Some(display::DETAIL_LOAD_FAILED.to_string()),
                }
                Err(error)
            }
        }
    }

    /// Checks in for today's confirmed appointment. Only offered when the
    /// server set `can_check_in`; a rejection surfaces the server's
    /// message, the fallback is "Check-in thất bại.".
    pub async fn check_in(&mut self, id: i64) -> Result<Appointment, DentifyError> {
        match self.api.check_in(id).await {
            Ok(updated) => {
                info!("Checked in appointment {}", id);
                self.absorb(&updated);
                Ok(updated)
            }
            Err(error) => {
                let error = DentifyError::from(error);
                warn!("Check-in failed for appointment {}: {}", id, error);
                self.notice = Some(display::action_notice(&error, display::CHECK_IN_FAILED));
                Err(error)
            }
        }
    }

    /// Cancels an appointment. The server refuses terminal appointments
    /// and cancellations closer than its cutoff; its message is surfaced.
    pub async fn cancel(&mut self, id: i64) -> Result<Appointment, DentifyError> {
        match self.api.cancel_appointment(id).await {
            Ok(updated) => {
                info!("Cancelled appointment {}", id);
                self.absorb(&updated);
                Ok(updated)
            }
            Err(error) => {
                let error = DentifyError::from(error);
                warn!("Cancel failed for appointment {}: {}", id, error);
                self.notice = Some(display::action_notice(&error, display::CANCEL_FAILED));
                Err(error)
            }
        }
    }

    /// Confirms a pending appointment.
    pub async fn confirm(&mut self, id: i64) -> Result<Appointment, DentifyError> {
        match self.api.confirm_appointment(id).await {
            Ok(updated) => {
                info!("Confirmed appointment {}", id);
                self.absorb(&updated);
                Ok(updated)
            }
            Err(error) => {
                let error = DentifyError::from(error);
                warn!("Confirm failed for appointment {}: {}", id, error);
                self.notice = Some(display::action_notice(&error, display::CONFIRM_FAILED));
                Err(error)
            }
        }
    }

    /// Moves an appointment to a new day and start time.
    pub async fn reschedule(
        &mut self,
        id: i64,
        selected_date: NaiveDate,
        selected_time: &str,
    ) -> Result<Appointment, DentifyError> {
        let request = RescheduleRequest {
            selected_date,
            selected_time: selected_time.to_string(),
        };
        match self.api.reschedule_appointment(id, request).await {
            Ok(updated) => {
                info!("Rescheduled appointment {} to {}", id, selected_date);
                self.absorb(&updated);
                Ok(updated)
            }
            Err(error) => {
                let error = DentifyError::from(error);
                warn!("Reschedule failed for appointment {}: {}", id, error);
                self.notice = Some(display::action_notice(&error, display::RESCHEDULE_FAILED));
                Err(error)
            }
        }
    }

    /// Folds an updated appointment back into the list and the open
    /// detail, keeping both views in step with the server.
    fn absorb(&mut self, updated: &Appointment) {
        if let Some(existing) = self
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == updated.id)
        {
            *existing = updated.clone();
        }
        if self.detail.as_ref().map(|detail| detail.id) == Some(updated.id) {
            self.detail = Some(updated.clone());
        }
    }
}
