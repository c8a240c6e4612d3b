// --- File: crates/dentify_booking/src/flow.rs ---

//! Four-step booking wizard: pick a day, pick a slot, confirm contact
//! details, land on a success summary.
//!
//! All wizard state lives in [`BookingFlow`]; nothing is kept in globals.
//! Slot loading is split into a begin/apply pair so that a response landing
//! after the user has navigated away is recognized by its generation and
//! dropped instead of overwriting the newer view.

use crate::calendar::{self, MonthGrid};
use crate::display;
use crate::slots;
use chrono::{NaiveDate, NaiveDateTime};
use dentify_common::{
    internal_error, not_found, validation_error, Appointment, AppointmentApi, ContactChannel,
    CreateAppointmentRequest, DentifyError, Slot,
};
use tracing::{debug, info, warn};

/// Wizard position. Transitions are strictly linear; there is no skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    SelectDate,
    SelectSlot,
    Contact,
    Success,
}

impl BookingStep {
    /// 1-based position shown in the stepper header.
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::SelectDate => 1,
            BookingStep::SelectSlot => 2,
            BookingStep::Contact => 3,
            BookingStep::Success => 4,
        }
    }
}

/// Service the customer picked on the booking page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceChoice {
    pub id: i64,
    pub name: String,
}

/// Ticket for one slot fetch. [`BookingFlow::apply_slot_load`] honors only
/// the ticket from the most recent [`BookingFlow::select_date`].
#[derive(Debug, Clone)]
pub struct SlotRequest {
    generation: u64,
    pub date: NaiveDate,
    pub service_id: i64,
}

/// What [`BookingFlow::apply_slot_load`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLoadOutcome {
    /// The response belonged to the newest request and is now on screen.
    Applied,
    /// A newer request had been issued meanwhile; the response was dropped.
    Stale,
    /// The newest request failed; a notice was raised.
    Failed,
}

/// Contact details collected on step 3. The channel starts preselected to
/// phone, mirroring the form's default option.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub channel: Option<ContactChannel>,
    pub value: String,
    pub note: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm {
            channel: Some(ContactChannel::Phone),
            value: String::new(),
            note: String::new(),
        }
    }
}

/// The booking wizard.
///
/// ```rust,no_run
/// use chrono::{NaiveDate, NaiveDateTime};
/// use dentify_api::ClinicClient;
/// use dentify_booking::flow::{BookingFlow, ServiceChoice};
///
/// # async fn run(client: ClinicClient, today: NaiveDate, now: NaiveDateTime) -> Result<(), dentify_common::DentifyError> {
/// let service = ServiceChoice { id: 3, name: "Cạo vôi răng".to_string() };
/// let mut flow = BookingFlow::new(client, Some(service), today);
/// flow.load_slots(today, today, now).await?;
/// # Ok(())
/// # }
/// ```
pub struct BookingFlow<A> {
    api: A,
    service: Option<ServiceChoice>,
    step: BookingStep,
    month: MonthGrid,
    selected_date: Option<NaiveDate>,
    slots: Vec<Slot>,
    selected_slot: Option<Slot>,
    contact: ContactForm,
    confirmation: Option<Appointment>,
    notice: Option<String>,
    generation: u64,
    submitting: bool,
}

impl<A> BookingFlow<A>
where
    A: AppointmentApi,
    DentifyError: From<A::Error>,
{
    /// Creates a wizard at step 1, showing the month containing `today`.
    pub fn new(api: A, service: Option<ServiceChoice>, today: NaiveDate) -> Self {
        BookingFlow {
            api,
            service,
            step: BookingStep::SelectDate,
            month: MonthGrid::for_date(today),
            selected_date: None,
            slots: Vec::new(),
            selected_slot: None,
            contact: ContactForm::default(),
            confirmation: None,
            notice: None,
            generation: 0,
            submitting: false,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn month(&self) -> &MonthGrid {
        &self.month
    }

    pub fn service(&self) -> Option<&ServiceChoice> {
        self.service.as_ref()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Slots currently on screen, in server order, past ones removed.
    pub fn day_slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn selected_slot(&self) -> Option<&Slot> {
        self.selected_slot.as_ref()
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// The appointment created by a successful submit.
    pub fn confirmation(&self) -> Option<&Appointment> {
        self.confirmation.as_ref()
    }

    /// Deep link into the appointments page for the created appointment.
    pub fn confirmation_link(&self) -> Option<String> {
        self.confirmation
            .as_ref()
            .map(|appointment| display::highlight_fragment(appointment.id))
    }

    /// Pending user-facing notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Takes the pending notice, clearing it.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replaces the service choice without touching wizard progress.
    pub fn set_service(&mut self, service: ServiceChoice) {
        self.service = Some(service);
    }

    pub fn show_prev_month(&mut self) {
        if let Some(grid) = self.month.prev() {
            self.month = grid;
        }
    }

    pub fn show_next_month(&mut self) {
        if let Some(grid) = self.month.next() {
            self.month = grid;
        }
    }

    /// Picks a day on the calendar and moves to step 2.
    ///
    /// Returns the ticket to pass to [`Self::apply_slot_load`] together
    /// with the fetch result. A day cannot be picked without a service
    /// ("Vui lòng chọn dịch vụ trước.") and past days are rejected.
    pub fn select_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<SlotRequest, DentifyError> {
        if self.step != BookingStep::SelectDate {
            return Err(internal_error("day selection is only available on step 1"));
        }
        let service_id = match &self.service {
            Some(service) => service.id,
            None => return Err(validation_error(display::SELECT_SERVICE_FIRST)),
        };
        if !calendar::day_selectable(date, today) {
            return Err(internal_error("selected day is in the past"));
        }
        self.step = BookingStep::SelectSlot;
        self.selected_date = Some(date);
        self.selected_slot = None;
        self.slots.clear();
        self.notice = None;
        self.generation += 1;
        debug!("Loading slots for {} (service {})", date, service_id);
        Ok(SlotRequest {
            generation: self.generation,
            date,
            service_id,
        })
    }

    /// Applies the outcome of a slot fetch.
    ///
    /// Responses for anything but the newest ticket are dropped. On
    /// success the slots are re-filtered against `now` so a slot that
    /// started while the request was in flight never reaches the screen.
    /// A 401 sends the wizard back to step 1 with the login notice; other
    /// failures keep step 2 with an empty list and "Không thể tải khung
    /// giờ.".
    pub fn apply_slot_load(
        &mut self,
        request: &SlotRequest,
        result: Result<Vec<Slot>, DentifyError>,
        now: NaiveDateTime,
    ) -> SlotLoadOutcome {
        if request.generation != self.generation || self.step != BookingStep::SelectSlot {
            debug!("Dropping stale slot response for {}", request.date);
            return SlotLoadOutcome::Stale;
        }
        match result {
            Ok(day_slots) => {
                self.slots = slots::filter_day_slots(&day_slots, request.date, now);
                SlotLoadOutcome::Applied
            }
            Err(DentifyError::AuthError(_)) => {
                self.step = BookingStep::SelectDate;
                self.selected_date = None;
                self.notice = Some(display::LOGIN_REQUIRED_BOOKING.to_string());
                SlotLoadOutcome::Failed
            }
            Err(error) => {
                warn!("Slot load for {} failed: {}", request.date, error);
                self.notice = Some(display::SLOTS_LOAD_FAILED.to_string());
                SlotLoadOutcome::Failed
            }
        }
    }

    /// Picks a day and fetches its slots in one call.
    pub async fn load_slots(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<SlotLoadOutcome, DentifyError> {
        let request = self.select_date(date, today)?;
        let result = self
            .api
            .fetch_slots(request.date, request.service_id)
            .await
            .map_err(DentifyError::from);
        Ok(self.apply_slot_load(&request, result, now))
    }

    /// Picks a slot from the current list and moves to step 3.
    ///
    /// Eligibility is re-checked against a fresh `now` at the moment of
    /// the click: a disabled slot answers "Bạn đã có lịch khám trùng thời
    /// gian này.", a full or meanwhile-started one "Khung giờ này đã đầy.
    /// Vui lòng chọn khung giờ khác.". Neither changes any state.
    pub fn select_slot(&mut self, slot_id: i64, now: NaiveDateTime) -> Result<(), DentifyError> {
        if self.step != BookingStep::SelectSlot {
            return Err(internal_error("slot selection is only available on step 2"));
        }
        let date = match self.selected_date {
            Some(date) => date,
            None => return Err(internal_error("no day selected")),
        };
        let slot = match self.slots.iter().find(|slot| slot.id == slot_id) {
            Some(slot) => slot.clone(),
            None => return Err(not_found(format!("Slot {}", slot_id))),
        };
        if slot.disabled {
            return Err(validation_error(display::SLOT_TAKEN));
        }
        if !slots::is_selectable(&slot, date, now) {
            return Err(validation_error(display::SLOT_FULL));
        }
        self.selected_slot = Some(slot);
        self.step = BookingStep::Contact;
        self.notice = None;
        Ok(())
    }

    pub fn set_contact_channel(&mut self, channel: ContactChannel) {
        self.contact.channel = Some(channel);
    }

    pub fn set_contact_value(&mut self, value: &str) {
        self.contact.value = value.to_string();
    }

    pub fn set_patient_note(&mut self, note: &str) {
        self.contact.note = note.to_string();
    }

    /// Validates step 3 and marks the submission as in flight.
    ///
    /// Slot, service, channel and a non-blank contact value are all
    /// required ("Vui lòng điền đầy đủ thông tin." otherwise). While a
    /// request is in flight further submissions are refused.
    pub fn begin_submit(&mut self) -> Result<CreateAppointmentRequest, DentifyError> {
        if self.step != BookingStep::Contact {
            return Err(internal_error("confirmation is only available on step 3"));
        }
        if self.submitting {
            return Err(internal_error("a booking request is already in flight"));
        }
        let contact_value = self.contact.value.trim();
        let (slot, service, channel) = match (&self.selected_slot, &self.service, self.contact.channel)
        {
            (Some(slot), Some(service), Some(channel)) if !contact_value.is_empty() => {
                (slot, service, channel)
            }
            _ => return Err(validation_error(display::FORM_INCOMPLETE)),
        };
        let request = CreateAppointmentRequest {
            slot_id: slot.id,
            service_id: service.id,
            patient_note: if self.contact.note.is_empty() {
                None
            } else {
                Some(self.contact.note.clone())
            },
            contact_channel: channel,
            contact_value: contact_value.to_string(),
        };
        self.submitting = true;
        self.notice = None;
        Ok(request)
    }

    /// Applies the outcome of the booking request.
    ///
    /// Success stores the returned appointment and moves to step 4. Any
    /// failure re-enables submission and keeps step 3; the notice carries
    /// "Bạn cần đăng nhập." on 401, the server's own message when it sent
    /// one, or "Đặt lịch thất bại.".
    pub fn apply_submit(
        &mut self,
        result: Result<Appointment, DentifyError>,
    ) -> Result<&Appointment, DentifyError> {
        self.submitting = false;
        match result {
            Ok(appointment) => {
                info!("Appointment {} booked", appointment.id);
                self.step = BookingStep::Success;
                self.notice = None;
                Ok(&*self.confirmation.insert(appointment))
            }
            Err(error) => {
                warn!("Booking failed: {}", error);
                self.notice = Some(display::action_notice(&error, display::BOOKING_FAILED));
                Err(error)
            }
        }
    }

    /// Validates, submits and applies the result in one call.
    pub async fn submit(&mut self) -> Result<&Appointment, DentifyError> {
        let request = self.begin_submit()?;
        let result = self
            .api
            .create_appointment(request)
            .await
            .map_err(DentifyError::from);
        self.apply_submit(result)
    }

    /// Steps back, discarding only the state introduced at the step being
    /// left. Leaving step 3 clears the slot choice and the contact form;
    /// leaving step 2 clears the slot list and the selected day and
    /// invalidates any in-flight slot fetch.
    pub fn back(&mut self) {
        match self.step {
            BookingStep::Contact => {
                self.selected_slot = None;
                self.contact = ContactForm::default();
                self.step = BookingStep::SelectSlot;
            }
            BookingStep::SelectSlot => {
                self.slots.clear();
                self.selected_date = None;
                self.generation += 1;
                self.step = BookingStep::SelectDate;
            }
            BookingStep::SelectDate | BookingStep::Success => {}
        }
        self.notice = None;
    }

    /// Returns to a pristine step 1, keeping the API handle and service.
    pub fn reset(&mut self, today: NaiveDate) {
        self.step = BookingStep::SelectDate;
        self.month = MonthGrid::for_date(today);
        self.selected_date = None;
        self.slots.clear();
        self.selected_slot = None;
        self.contact = ContactForm::default();
        self.confirmation = None;
        self.notice = None;
        self.generation += 1;
        self.submitting = false;
    }
}
