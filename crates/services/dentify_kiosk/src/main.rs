// File: services/dentify_kiosk/src/main.rs
use dentify_api::ClinicClient;
use dentify_booking::ServiceChoice;
use dentify_config::load_config;
use tracing::warn;

mod wizard;

#[tokio::main]
async fn main() {
    dentify_common::logging::init();

    let config = load_config().expect("Failed to load config");

    if config.api.session_cookie.is_none() {
        warn!("No session cookie configured; the clinic server will answer every request with 401");
    }

    let client = ClinicClient::new(config.api.clone()).expect("Failed to build the API client");

    let service = config.clinic.default_service_id.map(|id| ServiceChoice {
        id,
        name: config
            .clinic
            .default_service_name
            .clone()
            .unwrap_or_else(|| format!("Dịch vụ #{}", id)),
    });

    println!("Kiosk connected to {}", config.api.base_url);

    let mut kiosk = wizard::Kiosk::new(client, service, config.clinic.timezone.clone());
    if let Err(error) = kiosk.run().await {
        eprintln!("Kiosk stopped: {}", error);
    }
}
