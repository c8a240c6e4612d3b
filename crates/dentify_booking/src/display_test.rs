#[cfg(test)]
mod tests {
    use crate::display::{
        action_notice, availability_label, format_date_compact, format_date_display, format_time,
        format_time_range, highlight_fragment, month_label, success_summary, BOOKING_FAILED,
        CHECK_IN_FAILED, LOGIN_REQUIRED,
    };
    use chrono::NaiveDate;
    use dentify_common::{rejected, Appointment, AppointmentStatus, ContactChannel, DentifyError, Slot};

    fn slot() -> Slot {
        Slot {
            id: 1,
            date: None,
            start_time: "09:00:00".to_string(),
            end_time: "09:30:00".to_string(),
            dentist_id: None,
            dentist_name: None,
            available: None,
            capacity: None,
            booked_count: None,
            available_spots: None,
            disabled: false,
        }
    }

    fn appointment() -> Appointment {
        Appointment {
            id: 42,
            service_id: Some(3),
            service_name: Some("Cạo vôi răng".to_string()),
            dentist_id: Some(4),
            dentist_name: Some("Dr. Lan".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 3, 10),
            start_time: Some("09:00:00".to_string()),
            end_time: Some("09:30:00".to_string()),
            status: AppointmentStatus::Pending,
            notes: None,
            contact_channel: Some(ContactChannel::Phone),
            contact_value: Some("0912345678".to_string()),
            can_check_in: false,
        }
    }

    #[test]
    fn test_untracked_slot_reads_as_free() {
        assert_eq!(availability_label(&slot()), "Trống");
    }

    #[test]
    fn test_disabled_wins_over_everything() {
        let mut overlapping = slot();
        overlapping.disabled = true;
        overlapping.available_spots = Some(2);
        assert_eq!(availability_label(&overlapping), "Đã đặt");
    }

    #[test]
    fn test_seat_counts_are_announced() {
        let mut two_left = slot();
        two_left.available_spots = Some(2);
        assert_eq!(availability_label(&two_left), "Còn 2 chỗ");

        let mut none_left = slot();
        none_left.available_spots = Some(0);
        assert_eq!(availability_label(&none_left), "Hết chỗ");
    }

    #[test]
    fn test_unavailable_without_seat_tracking_reads_full() {
        let mut taken = slot();
        taken.available = Some(false);
        assert_eq!(availability_label(&taken), "Hết chỗ");
    }

    #[test]
    fn test_positive_seat_count_wins_over_available_flag() {
        let mut slot_with_both = slot();
        slot_with_both.available = Some(false);
        slot_with_both.available_spots = Some(3);
        assert_eq!(availability_label(&slot_with_both), "Còn 3 chỗ");
    }

    #[test]
    fn test_format_time_truncates_seconds() {
        assert_eq!(format_time("09:00:00"), "09:00");
        assert_eq!(format_time("09:00"), "09:00");
        assert_eq!(format_time("9h"), "9h");
        assert_eq!(format_time(""), "");
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_date_display(date), "05/03/2025");
        assert_eq!(format_date_compact(date), "5/3/2025");
    }

    #[test]
    fn test_month_label_is_one_based() {
        assert_eq!(month_label(2025, 3), "Tháng 3 / 2025");
        assert_eq!(month_label(2026, 12), "Tháng 12 / 2026");
    }

    #[test]
    fn test_time_range_degrades_gracefully() {
        assert_eq!(
            format_time_range(Some("09:00:00"), Some("09:30:00")),
            "09:00 - 09:30"
        );
        assert_eq!(format_time_range(Some("09:00:00"), None), "09:00");
        assert_eq!(format_time_range(None, None), "");
    }

    #[test]
    fn test_success_summary_lists_the_booking() {
        assert_eq!(
            success_summary(&appointment()),
            "Thông tin lịch vừa đặt:\n\
             Dịch vụ: Cạo vôi răng\n\
             Bác sĩ: Dr. Lan\n\
             Ngày: 10/03/2025\n\
             Giờ: 09:00 - 09:30"
        );
    }

    #[test]
    fn test_success_summary_placeholders() {
        let mut unassigned = appointment();
        unassigned.dentist_name = None;
        unassigned.service_name = None;
        let summary = success_summary(&unassigned);
        assert!(summary.contains("Bác sĩ: Sẽ được gán sau"), "got: {}", summary);
        assert!(summary.contains("Dịch vụ: —"), "got: {}", summary);
    }

    #[test]
    fn test_highlight_fragment() {
        assert_eq!(highlight_fragment(42), "#highlight=42");
    }

    #[test]
    fn test_action_notice_prefers_server_words() {
        let rejection = rejected(400, "Check-in not allowed.");
        assert_eq!(
            action_notice(&rejection, CHECK_IN_FAILED),
            "Check-in not allowed."
        );
    }

    #[test]
    fn test_action_notice_falls_back_when_server_is_silent() {
        let blank = rejected(500, "   ");
        assert_eq!(action_notice(&blank, BOOKING_FAILED), BOOKING_FAILED);

        let transport = DentifyError::HttpError("connection refused".to_string());
        assert_eq!(action_notice(&transport, CHECK_IN_FAILED), CHECK_IN_FAILED);
    }

    #[test]
    fn test_action_notice_maps_auth_to_login_prompt() {
        let auth = DentifyError::AuthError("Not authenticated".to_string());
        assert_eq!(action_notice(&auth, BOOKING_FAILED), LOGIN_REQUIRED);
    }
}
