// --- File: crates/dentify_booking/src/display.rs ---

//! User-facing copy and formatting.
//!
//! The clinic serves a Vietnamese audience; the notice strings below are
//! the exact wording the frontend shows and must not be reworded casually.

use chrono::{Datelike, NaiveDate};
use dentify_common::{Appointment, DentifyError, Slot};

// Booking wizard notices.
pub const SELECT_SERVICE_FIRST: &str = "Vui lòng chọn dịch vụ trước.";
pub const LOGIN_REQUIRED_BOOKING: &str = "Bạn cần đăng nhập để đặt lịch.";
pub const SLOT_TAKEN: &str = "Bạn đã có lịch khám trùng thời gian này.";
pub const SLOT_FULL: &str = "Khung giờ này đã đầy. Vui lòng chọn khung giờ khác.";
pub const SLOTS_LOAD_FAILED: &str = "Không thể tải khung giờ.";
pub const FORM_INCOMPLETE: &str = "Vui lòng điền đầy đủ thông tin.";
pub const LOGIN_REQUIRED: &str = "Bạn cần đăng nhập.";
pub const BOOKING_FAILED: &str = "Đặt lịch thất bại.";

// Appointments panel notices.
pub const LOGIN_REQUIRED_APPOINTMENTS: &str = "Bạn cần đăng nhập để xem lịch hẹn.";
pub const APPOINTMENTS_LOAD_FAILED: &str = "Không thể tải danh sách lịch hẹn.";
pub const DETAIL_LOAD_FAILED: &str = "Không thể tải chi tiết.";
pub const CHECK_IN_FAILED: &str = "Check-in thất bại.";
pub const CANCEL_FAILED: &str = "Không thể hủy lịch.";
pub const CONFIRM_FAILED: &str = "Xác nhận lịch hẹn thất bại.";
pub const RESCHEDULE_FAILED: &str = "Đổi lịch thất bại.";

/// Placeholder shown while no dentist has been assigned.
pub const DENTIST_PENDING: &str = "Sẽ được gán sau";

/// Availability column text for one slot row.
///
/// `disabled` (the customer already holds an overlapping appointment) wins
/// over everything else; a tracked positive seat count is announced; a
/// zero count or an explicit `available == false` reads as full; a slot
/// the server says nothing about is free.
pub fn availability_label(slot: &Slot) -> String {
    if slot.disabled {
        return "Đã đặt".to_string();
    }
    if let Some(spots) = slot.available_spots {
        if spots > 0 {
            return format!("Còn {} chỗ", spots);
        }
    }
    if slot.available_spots == Some(0) || slot.available == Some(false) {
        return "Hết chỗ".to_string();
    }
    "Trống".to_string()
}

/// First five characters of a `HH:MM[:SS]` time; shorter values pass
/// through unchanged.
pub fn format_time(raw: &str) -> &str {
    raw.get(..5).unwrap_or(raw)
}

/// Zero-padded `DD/MM/YYYY`, as the booking summary prints dates.
pub fn format_date_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Unpadded `D/M/YYYY`, as the appointments list prints dates.
pub fn format_date_compact(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Header text above the month grid, for example `Tháng 3 / 2025`.
/// `month` is 1-based.
pub fn month_label(year: i32, month: u32) -> String {
    format!("Tháng {} / {}", month, year)
}

/// `HH:MM - HH:MM` when both ends are known, just the start when the end
/// is missing, empty otherwise.
pub fn format_time_range(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{} - {}", format_time(start), format_time(end)),
        (Some(start), None) => format_time(start).to_string(),
        _ => String::new(),
    }
}

/// Multi-line summary shown on the success step.
pub fn success_summary(appointment: &Appointment) -> String {
    let service = appointment.service_name.as_deref().unwrap_or("—");
    let dentist = appointment.dentist_name.as_deref().unwrap_or(DENTIST_PENDING);
    let date = appointment
        .date
        .map(format_date_display)
        .unwrap_or_default();
    let time = format_time_range(
        appointment.start_time.as_deref(),
        appointment.end_time.as_deref(),
    );
    format!(
        "Thông tin lịch vừa đặt:\nDịch vụ: {}\nBác sĩ: {}\nNgày: {}\nGiờ: {}",
        service, dentist, date, time
    )
}

/// Deep-link fragment pointing the appointments page at one entry.
pub fn highlight_fragment(id: i64) -> String {
    format!("#highlight={}", id)
}

/// Alert text for a failed server action: the server's own words when it
/// sent any, the login prompt on 401, otherwise the per-action fallback.
pub fn action_notice(error: &DentifyError, fallback: &str) -> String {
    match error {
        DentifyError::AuthError(_) => LOGIN_REQUIRED.to_string(),
        DentifyError::RejectedError { message, .. } if !message.trim().is_empty() => {
            message.clone()
        }
        _ => fallback.to_string(),
    }
}
