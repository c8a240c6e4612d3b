// File: services/dentify_kiosk/src/wizard.rs

//! Interactive terminal front end.
//!
//! Drives [`BookingFlow`] through its four steps and the appointments
//! panel through list, detail and the follow-up actions. All clinic copy
//! comes from `dentify_booking::display`; this module only renders and
//! reads keys.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use dentify_api::ClinicClient;
use dentify_booking::{calendar, display, slots};
use dentify_booking::{AppointmentsPanel, BookingFlow, BookingStep, ServiceChoice};
use dentify_common::{internal_error, Appointment, AppointmentStatus, ContactChannel, DentifyError};
use std::io::{self, Write};
use tracing::warn;

pub struct Kiosk {
    flow: BookingFlow<ClinicClient>,
    panel: AppointmentsPanel<ClinicClient>,
    timezone: String,
    running: bool,
}

impl Kiosk {
    pub fn new(client: ClinicClient, service: Option<ServiceChoice>, timezone: String) -> Self {
        let (today, _) = clinic_clock(&timezone);
        Kiosk {
            flow: BookingFlow::new(client.clone(), service, today),
            panel: AppointmentsPanel::new(client),
            timezone,
            running: true,
        }
    }

    pub async fn run(&mut self) -> Result<(), DentifyError> {
        self.print_header();

        while self.running {
            self.print_menu();
            let choice = read_input("Chọn")?;

            match choice.as_str() {
                "1" => self.run_booking().await?,
                "2" => self.run_appointments().await?,
                "3" | "q" => {
                    self.running = false;
                    println!("\nHẹn gặp lại!");
                }
                _ => println!("Lựa chọn không hợp lệ"),
            }
        }
        Ok(())
    }

    fn print_header(&self) {
        println!("\n{}", "=".repeat(60));
        println!("       KIOSK ĐẶT LỊCH KHÁM NHA KHOA");
        println!("{}", "=".repeat(60));
    }

    fn print_menu(&self) {
        println!("\n--- Menu chính ---");
        println!("1. Đặt lịch khám");
        println!("2. Lịch hẹn của tôi");
        println!("3. Thoát");
        println!("{}", "-".repeat(20));
    }

    async fn run_booking(&mut self) -> Result<(), DentifyError> {
        loop {
            let stay = match self.flow.step() {
                BookingStep::SelectDate => self.step_select_date().await?,
                BookingStep::SelectSlot => self.step_select_slot()?,
                BookingStep::Contact => self.step_contact().await?,
                BookingStep::Success => self.step_success()?,
            };
            if !stay {
                return Ok(());
            }
        }
    }

    async fn step_select_date(&mut self) -> Result<bool, DentifyError> {
        if let Some(notice) = self.flow.take_notice() {
            println!("\n{}", notice);
        }
        let (today, now) = clinic_clock(&self.timezone);
        self.print_calendar();

        let input = read_input("Ngày (số), n: tháng sau, p: tháng trước, q: quay lại")?;
        match input.as_str() {
            "n" => self.flow.show_next_month(),
            "p" => self.flow.show_prev_month(),
            "q" => return Ok(false),
            raw => {
                if let Ok(day) = raw.parse::<u32>() {
                    let month = self.flow.month();
                    if let Some(date) = NaiveDate::from_ymd_opt(month.year, month.month, day) {
                        // Past days stay inert, exactly like the grayed calendar cells.
                        if calendar::day_selectable(date, today) {
                            if let Err(error) = self.flow.load_slots(date, today, now).await {
                                print_flow_error(&error);
                            }
                        }
                    }
                }
            }
        }
        Ok(true)
    }

    fn print_calendar(&self) {
        let month = self.flow.month();
        println!("\n--- {} ---", month.label());
        println!("  CN  T2  T3  T4  T5  T6  T7");
        for week in month.cells.chunks(7) {
            let row: String = week
                .iter()
                .map(|cell| match cell {
                    Some(date) => format!("{:>4}", date.day()),
                    None => "    ".to_string(),
                })
                .collect();
            println!("{}", row);
        }
    }

    fn step_select_slot(&mut self) -> Result<bool, DentifyError> {
        if let Some(notice) = self.flow.take_notice() {
            println!("\n{}", notice);
        }
        let date = match self.flow.selected_date() {
            Some(date) => date,
            None => {
                self.flow.back();
                return Ok(true);
            }
        };

        println!(
            "\n--- Khung giờ ngày {} ---",
            display::format_date_display(date)
        );
        let day_slots = self.flow.day_slots();
        if day_slots.is_empty() {
            println!("(không có khung giờ)");
        }
        for (index, slot) in day_slots.iter().enumerate() {
            let dentist = slot
                .dentist_name
                .as_deref()
                .map(|name| format!("  {}", name))
                .unwrap_or_default();
            println!(
                "{:>2}. {} - {}  [{}]{}",
                index + 1,
                display::format_time(&slot.start_time),
                display::format_time(&slot.end_time),
                display::availability_label(slot),
                dentist
            );
        }

        let input = read_input("Chọn khung giờ (số), q: quay lại")?;
        if input == "q" {
            self.flow.back();
            return Ok(true);
        }
        let slot_id = input
            .parse::<usize>()
            .ok()
            .filter(|index| *index >= 1)
            .and_then(|index| self.flow.day_slots().get(index - 1))
            .map(|slot| slot.id);
        if let Some(slot_id) = slot_id {
            let (_, now) = clinic_clock(&self.timezone);
            if let Err(error) = self.flow.select_slot(slot_id, now) {
                print_flow_error(&error);
            }
        }
        Ok(true)
    }

    async fn step_contact(&mut self) -> Result<bool, DentifyError> {
        println!("\n--- Xác nhận thông tin ---");
        if let Some(service) = self.flow.service() {
            println!("Dịch vụ: {}", service.name);
        }
        if let (Some(date), Some(slot)) = (self.flow.selected_date(), self.flow.selected_slot()) {
            println!(
                "Thời gian: {} {}",
                display::format_date_display(date),
                display::format_time(&slot.start_time)
            );
        }

        let channel = read_input("Kênh liên hệ (phone/zalo/email, Enter giữ PHONE)")?;
        if !channel.is_empty() {
            match ContactChannel::from_input(&channel) {
                Ok(channel) => self.flow.set_contact_channel(channel),
                Err(_) => println!("Kênh không hợp lệ, giữ PHONE"),
            }
        }
        let value = read_input("Thông tin liên hệ (q: quay lại)")?;
        if value == "q" {
            self.flow.back();
            return Ok(true);
        }
        self.flow.set_contact_value(&value);
        let note = read_input("Ghi chú (Enter để bỏ qua)")?;
        self.flow.set_patient_note(&note);

        let confirm = read_input("Đặt lịch? (y/n)")?;
        if confirm.eq_ignore_ascii_case("y") {
            match self.flow.submit().await.map(|_| ()) {
                Ok(()) => {}
                Err(error) => match self.flow.take_notice() {
                    Some(notice) => println!("\n{}", notice),
                    None => print_flow_error(&error),
                },
            }
        } else {
            self.flow.back();
        }
        Ok(true)
    }

    fn step_success(&mut self) -> Result<bool, DentifyError> {
        if let Some(appointment) = self.flow.confirmation() {
            println!("\nĐặt lịch thành công!");
            println!("{}", display::success_summary(appointment));
        }
        if let Some(link) = self.flow.confirmation_link() {
            self.panel.set_highlight_from_fragment(&link);
        }

        let (today, _) = clinic_clock(&self.timezone);
        let choice = read_input("1: Đặt lịch mới, Enter: về menu chính")?;
        self.flow.reset(today);
        Ok(choice == "1")
    }

    async fn run_appointments(&mut self) -> Result<(), DentifyError> {
        loop {
            if self.panel.load().await.is_err() {
                if let Some(notice) = self.panel.take_notice() {
                    println!("\n{}", notice);
                }
                return Ok(());
            }
            self.print_appointments();

            let input = read_input("Chọn lịch hẹn (số), q: quay lại")?;
            if input == "q" || input.is_empty() {
                return Ok(());
            }
            let id = input
                .parse::<usize>()
                .ok()
                .filter(|index| *index >= 1)
                .and_then(|index| self.panel.appointments().get(index - 1))
                .map(|appointment| appointment.id);
            match id {
                Some(id) => self.show_detail(id).await?,
                None => println!("Lựa chọn không hợp lệ"),
            }
        }
    }

    fn print_appointments(&self) {
        let appointments = self.panel.appointments();
        println!("\n--- Lịch hẹn của tôi ({}) ---", appointments.len());
        if appointments.is_empty() {
            println!("(chưa có lịch hẹn)");
        }
        for (index, appointment) in appointments.iter().enumerate() {
            let marker = if self.panel.highlight() == Some(appointment.id) {
                ">"
            } else {
                " "
            };
            let date = appointment
                .date
                .map(display::format_date_compact)
                .unwrap_or_default();
            let start = appointment
                .start_time
                .as_deref()
                .map(display::format_time)
                .unwrap_or_default();
            println!(
                "{}{:>2}. {} {}  {}  [{}]",
                marker,
                index + 1,
                date,
                start,
                appointment.service_name.as_deref().unwrap_or(""),
                appointment.status.as_str()
            );
        }
    }

    async fn show_detail(&mut self, id: i64) -> Result<(), DentifyError> {
        let mut current = match self.panel.open_detail(id).await {
            Ok(appointment) => appointment,
            Err(_) => {
                if let Some(notice) = self.panel.take_notice() {
                    println!("\n{}", notice);
                }
                return Ok(());
            }
        };

        loop {
            print_detail(&current);

            let mut options = String::from("q: quay lại");
            if !current.status.is_terminal() {
                options = format!("h: hủy lịch, r: đổi lịch, {}", options);
            }
            if current.status == AppointmentStatus::Pending {
                options = format!("x: xác nhận, {}", options);
            }
            if current.can_check_in {
                options = format!("c: check-in, {}", options);
            }

            let input = read_input(&options)?;
            let result = match input.as_str() {
                "c" if current.can_check_in => self.panel.check_in(id).await,
                "x" if current.status == AppointmentStatus::Pending => {
                    self.panel.confirm(id).await
                }
                "h" if !current.status.is_terminal() => self.panel.cancel(id).await,
                "r" if !current.status.is_terminal() => {
                    let raw_date = read_input("Ngày mới (YYYY-MM-DD)")?;
                    let date = match NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d") {
                        Ok(date) => date,
                        Err(_) => {
                            println!("Ngày không hợp lệ");
                            continue;
                        }
                    };
                    let time = read_input("Giờ mới (HH:MM)")?;
                    self.panel.reschedule(id, date, &time).await
                }
                "q" | "" => return Ok(()),
                _ => {
                    println!("Lựa chọn không hợp lệ");
                    continue;
                }
            };

            match result {
                Ok(updated) => {
                    println!("\nTrạng thái: {}", updated.status.as_str());
                    current = updated;
                }
                Err(_) => {
                    if let Some(notice) = self.panel.take_notice() {
                        println!("\n{}", notice);
                    }
                }
            }
        }
    }
}

fn print_detail(appointment: &Appointment) {
    println!("\n--- Chi tiết lịch hẹn #{} ---", appointment.id);
    println!(
        "Dịch vụ: {}",
        appointment.service_name.as_deref().unwrap_or("")
    );
    println!(
        "Bác sĩ: {}",
        appointment.dentist_name.as_deref().unwrap_or("")
    );
    let date = appointment
        .date
        .map(display::format_date_compact)
        .unwrap_or_default();
    println!("Ngày: {}", date);
    println!(
        "Giờ: {}",
        display::format_time_range(
            appointment.start_time.as_deref(),
            appointment.end_time.as_deref()
        )
    );
    println!("Trạng thái: {}", appointment.status.as_str());
    println!(
        "Liên hệ: {}: {}",
        appointment
            .contact_channel
            .map(|channel| channel.as_str())
            .unwrap_or(""),
        appointment.contact_value.as_deref().unwrap_or("")
    );
    println!("Ghi chú: {}", appointment.notes.as_deref().unwrap_or("—"));
}

fn print_flow_error(error: &DentifyError) {
    match error {
        DentifyError::ValidationError(message) => println!("\n{}", message),
        other => warn!("Wizard refused the action: {}", other),
    }
}

/// Today and the current wall-clock time in the clinic's timezone. Falls
/// back to UTC when the configured timezone name is unknown.
fn clinic_clock(timezone: &str) -> (NaiveDate, NaiveDateTime) {
    let now = match slots::clinic_now(timezone) {
        Some(now) => now,
        None => {
            warn!("Unknown clinic timezone '{}', using UTC", timezone);
            Utc::now().naive_utc()
        }
    };
    (now.date(), now)
}

fn read_input(prompt: &str) -> Result<String, DentifyError> {
    print!("{}: ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(internal_error("stdin closed"));
    }
    Ok(input.trim().to_string())
}
