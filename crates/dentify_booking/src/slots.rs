// --- File: crates/dentify_booking/src/slots.rs ---

//! Client-side slot eligibility.
//!
//! The server already excludes slots it considers unbookable, but the list
//! it returns may sit on screen for a while and the two clocks are never
//! perfectly aligned. Every rule here is therefore re-derived locally from
//! the slot payload and an explicit `now`; the server still has the final
//! word when the booking is submitted.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use dentify_common::Slot;
use tracing::debug;

/// Parses a slot time of day, accepting both `HH:MM` and `HH:MM:SS`.
pub fn parse_start_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// The instant a slot begins.
///
/// A slot carrying its own date wins over the day the panel queried for.
pub fn slot_start(slot: &Slot, selected_date: NaiveDate) -> Option<NaiveDateTime> {
    let date = slot.date.unwrap_or(selected_date);
    parse_start_time(&slot.start_time).map(|time| date.and_time(time))
}

/// True when the slot begins strictly after `now`.
///
/// A slot whose start time cannot be parsed is never in the future.
pub fn starts_in_future(slot: &Slot, selected_date: NaiveDate, now: NaiveDateTime) -> bool {
    match slot_start(slot, selected_date) {
        Some(start) => start > now,
        None => false,
    }
}

/// Whether the customer may pick this slot right now: it is not disabled
/// by an overlapping appointment of their own, has seats left (or the
/// server does not track seats), was not explicitly marked unavailable,
/// and begins strictly after `now`.
pub fn is_selectable(slot: &Slot, selected_date: NaiveDate, now: NaiveDateTime) -> bool {
    if slot.disabled {
        return false;
    }
    if matches!(slot.available_spots, Some(spots) if spots <= 0) {
        return false;
    }
    if slot.available == Some(false) {
        return false;
    }
    starts_in_future(slot, selected_date, now)
}

/// Drops slots that have already started, keeping the server's ordering
/// for the rest. Full or disabled slots stay: they are rendered with their
/// availability label, just not selectable.
pub fn filter_day_slots(slots: &[Slot], selected_date: NaiveDate, now: NaiveDateTime) -> Vec<Slot> {
    let kept: Vec<Slot> = slots
        .iter()
        .filter(|slot| starts_in_future(slot, selected_date, now))
        .cloned()
        .collect();
    if kept.len() < slots.len() {
        debug!(
            "Dropped {} past slot(s) for {}",
            slots.len() - kept.len(),
            selected_date
        );
    }
    kept
}

/// Wall-clock time in the clinic's timezone, or `None` for an unknown
/// timezone name.
pub fn clinic_now(timezone: &str) -> Option<NaiveDateTime> {
    let tz: Tz = timezone.parse().ok()?;
    Some(Utc::now().with_timezone(&tz).naive_local())
}
