// --- File: crates/dentify_booking/src/lib.rs ---
// Declare modules within this crate
pub mod appointments;
pub mod calendar;
#[cfg(test)]
mod calendar_test;
pub mod display;
#[cfg(test)]
mod display_test;
pub mod flow;
pub mod slots;
#[cfg(test)]
mod slots_proptest;

// Re-export the two controllers and their vocabulary
pub use appointments::{parse_highlight_fragment, AppointmentsPanel};
pub use calendar::MonthGrid;
pub use flow::{BookingFlow, BookingStep, ContactForm, ServiceChoice, SlotLoadOutcome, SlotRequest};
