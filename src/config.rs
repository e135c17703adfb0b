use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub action_port: u16,
    pub rasa_url: String,
    pub bookings_path: String,
    /// SQLite file for shared session bookkeeping; in-memory when unset.
    pub session_db: Option<String>,
    pub request_timeout: Duration,
    pub status_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5001),
            action_port: env::var("ACTION_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5055),
            rasa_url: env::var("RASA_URL").unwrap_or_else(|_| "http://localhost:5005".to_string()),
            bookings_path: env::var("BOOKINGS_PATH").unwrap_or_else(|_| "bookings.txt".to_string()),
            session_db: env::var("SESSION_DB").ok().filter(|v| !v.trim().is_empty()),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
            status_timeout: Duration::from_secs(
                env::var("STATUS_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}
