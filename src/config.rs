use crate::error::{config_error, BookingResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default recipient for business booking notifications
pub const DEFAULT_BUSINESS_EMAIL: &str = "sales@antovabuilders.com";
/// Default sender for outgoing mail
pub const DEFAULT_FROM_EMAIL: &str = "noreply@antovabuilders.com";
/// Default phone number shown in client confirmations
pub const DEFAULT_BUSINESS_PHONE: &str = "(208) 625-8342";
/// Default company display name
pub const DEFAULT_COMPANY_NAME: &str = "Antova Builders";
/// Default base URL of the third-party scheduling widget
pub const DEFAULT_SCHEDULER_URL: &str = "https://koalendar.com/e/meet-with-antova-builders";

/// Main configuration structure for the booking service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Company display name used in notification payloads
    pub company_name: String,
    /// Recipient address for business booking notifications
    pub business_email: String,
    /// Sender address for outgoing mail
    pub from_email: String,
    /// Phone number shown in client confirmations
    pub business_phone: String,
    /// Base URL of the third-party scheduling widget
    pub scheduler_url: String,
}

/// Optional overrides loaded from `config/booking.toml`
#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    bind_address: Option<String>,
    port: Option<u16>,
    company_name: Option<String>,
    business_email: Option<String>,
    from_email: Option<String>,
    business_phone: Option<String>,
    scheduler_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: String::from("127.0.0.1"),
            port: 3000,
            company_name: String::from(DEFAULT_COMPANY_NAME),
            business_email: String::from(DEFAULT_BUSINESS_EMAIL),
            from_email: String::from(DEFAULT_FROM_EMAIL),
            business_phone: String::from(DEFAULT_BUSINESS_PHONE),
            scheduler_url: String::from(DEFAULT_SCHEDULER_URL),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> BookingResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let defaults = Config::default();

        let bind_address = env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address);

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| config_error("Invalid PORT format"))?,
            Err(_) => defaults.port,
        };

        let company_name = env::var("COMPANY_NAME").unwrap_or(defaults.company_name);
        let business_email = env::var("BUSINESS_EMAIL").unwrap_or(defaults.business_email);
        let from_email = env::var("FROM_EMAIL").unwrap_or(defaults.from_email);
        let business_phone = env::var("BUSINESS_PHONE").unwrap_or(defaults.business_phone);
        let scheduler_url = env::var("SCHEDULER_URL").unwrap_or(defaults.scheduler_url);

        let mut config = Config {
            bind_address,
            port,
            company_name,
            business_email,
            from_email,
            business_phone,
            scheduler_url,
        };

        // Apply file overrides if the config file exists
        if let Ok(content) = fs::read_to_string("config/booking.toml") {
            let overrides: ConfigOverrides = toml::from_str(&content)?;
            config.apply(overrides);
        }

        Ok(config)
    }

    /// Merge file overrides over the current values
    fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(bind_address) = overrides.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(company_name) = overrides.company_name {
            self.company_name = company_name;
        }
        if let Some(business_email) = overrides.business_email {
            self.business_email = business_email;
        }
        if let Some(from_email) = overrides.from_email {
            self.from_email = from_email;
        }
        if let Some(business_phone) = overrides.business_phone {
            self.business_phone = business_phone;
        }
        if let Some(scheduler_url) = overrides.scheduler_url {
            self.scheduler_url = scheduler_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.business_email, DEFAULT_BUSINESS_EMAIL);
        assert_eq!(config.from_email, DEFAULT_FROM_EMAIL);
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        let overrides: ConfigOverrides =
            toml::from_str("port = 8080\nbusiness_email = \"owner@example.com\"").unwrap();
        config.apply(overrides);
        assert_eq!(config.port, 8080);
        assert_eq!(config.business_email, "owner@example.com");
        // Untouched fields keep their defaults
        assert_eq!(config.company_name, DEFAULT_COMPANY_NAME);
    }
}
