use leptos::logging::{log, warn};
use std::env;

/// Runtime settings read from the environment at startup.
pub struct Config {
    pub database_path: String,
    /// Secret used to sign session cookies. Needs at least 64 bytes;
    /// anything shorter (or absent) falls back to a generated key that
    /// does not survive a restart.
    pub session_secret: Option<String>,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn load() -> Self {
        let database_path = env::var("FLEAMARKET_DB").unwrap_or_else(|_| {
            log!("FLEAMARKET_DB not set, using default: fleamarket.db");
            "fleamarket.db".to_string()
        });

        let session_secret = match env::var("FLEAMARKET_SESSION_KEY") {
            Ok(secret) if secret.len() >= 64 => Some(secret),
            Ok(_) => {
                warn!("FLEAMARKET_SESSION_KEY is shorter than 64 bytes, ignoring it");
                None
            }
            Err(_) => None,
        };

        let seed_demo_data = env::var("FLEAMARKET_SEED")
            .map(|value| value == "1")
            .unwrap_or(false);

        Self {
            database_path,
            session_secret,
            seed_demo_data,
        }
    }
}
