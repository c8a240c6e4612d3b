// --- File: crates/dentify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Clinic API Config ---
// Holds the connection settings for the customer REST API. The session
// cookie is what the browser would send as same-origin credentials; it is
// usually supplied via DENTIFY__API__SESSION_COOKIE rather than a file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String, // e.g. https://clinic.example.com
    #[serde(default)]
    pub session_cookie: Option<String>,
    /// Request timeout in seconds; the shared default applies when absent.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

// --- Clinic Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClinicConfig {
    /// IANA timezone the clinic schedules in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Service preselected when the kiosk starts.
    #[serde(default)]
    pub default_service_id: Option<i64>,
    #[serde(default)]
    pub default_service_name: Option<String>,
}

fn default_timezone() -> String {
    "Asia/Ho_Chi_Minh".to_string()
}

impl Default for ClinicConfig {
    fn default() -> Self {
        ClinicConfig {
            timezone: default_timezone(),
            default_service_id: None,
            default_service_name: None,
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // API config is mandatory
    pub api: ApiConfig,

    #[serde(default)]
    pub clinic: ClinicConfig,
}
