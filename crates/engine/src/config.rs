// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine configuration.
//!
//! Ticket type sets, per-service base prices, discount fractions, and the
//! expiry retention window are configuration data loaded once at engine
//! construction. The raw pricing format keeps the legacy convention: one
//! number per tier, where a fraction in (0, 1) is a discount against the
//! service's Regular price and a value of 1 or more is a flat price. The
//! dual interpretation is resolved into the typed
//! [`PricingEntry`](seatline_domain::PricingEntry) union here, exactly
//! once.

use seatline_domain::{
    DomainError, Money, PricingEntry, PricingTable, Service, ServicePricing, TicketType,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use time::Duration;

/// Default booking retention before the expiry sweep releases a seat.
const DEFAULT_RETENTION_HOURS: i64 = 24;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The raw document could not be read or parsed.
    Parse(String),
    /// A service key in the pricing map is not recognized.
    UnknownService(String),
    /// A service's pricing map has no usable `Regular` entry.
    MissingRegular {
        /// The service missing its base price.
        service: String,
    },
    /// A configured value violates a domain rule.
    Invalid(DomainError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Failed to parse configuration: {msg}"),
            Self::UnknownService(key) => {
                write!(f, "Unknown service key '{key}' in pricing configuration")
            }
            Self::MissingRegular { service } => {
                write!(
                    f,
                    "Service '{service}' has no flat 'Regular' price configured"
                )
            }
            Self::Invalid(err) => write!(f, "Invalid configuration value: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<DomainError> for ConfigError {
    fn from(err: DomainError) -> Self {
        Self::Invalid(err)
    }
}

/// The raw on-disk configuration document.
#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    /// Hours a booking may be held before the expiry sweep releases it.
    #[serde(default = "default_retention_hours")]
    retention_hours: i64,
    /// Per-service pricing: service key to tier-name/value map.
    pricing: BTreeMap<String, BTreeMap<String, f64>>,
}

const fn default_retention_hours() -> i64 {
    DEFAULT_RETENTION_HOURS
}

/// Resolved engine configuration: retention window plus pricing tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long a booking may be held before it is eligible for the
    /// expiry sweep.
    pub retention: Duration,
    /// The resolved pricing table.
    pub pricing: PricingTable,
}

impl EngineConfig {
    /// Loads configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the document cannot be parsed, names an
    /// unknown service, lacks a flat `Regular` entry for a service, or
    /// carries an invalid pricing value.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let raw_config: RawConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        Self::resolve(raw_config)
    }

    /// Loads configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - The configuration file path
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the document
    /// is invalid.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw: String = std::fs::read_to_string(path.as_ref())
            .map_err(|err| ConfigError::Parse(err.to_string()))?;
        Self::from_json_str(&raw)
    }

    fn resolve(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut pricing: PricingTable = PricingTable::new();

        for (service_key, tiers) in raw.pricing {
            let service: Service = service_key
                .parse()
                .map_err(|_| ConfigError::UnknownService(service_key.clone()))?;

            // The Regular tier anchors the base price and must be flat.
            let regular_value: f64 = tiers
                .get("Regular")
                .copied()
                .filter(|value| *value >= 1.0)
                .ok_or_else(|| ConfigError::MissingRegular {
                    service: service_key.clone(),
                })?;

            let mut service_pricing: ServicePricing =
                ServicePricing::new(Money::from_peso_value(regular_value));
            for (tier_name, value) in &tiers {
                if tier_name == "Regular" {
                    continue;
                }
                let entry: PricingEntry = PricingEntry::from_raw(tier_name, *value)?;
                service_pricing.set_entry(TicketType::new(tier_name), entry);
            }

            pricing.set_service(service, service_pricing);
        }

        Ok(Self {
            retention: Duration::hours(raw.retention_hours),
            pricing,
        })
    }
}

impl Default for EngineConfig {
    /// The stock configuration: 24-hour retention and the standard
    /// pricing table.
    fn default() -> Self {
        Self {
            retention: Duration::hours(DEFAULT_RETENTION_HOURS),
            pricing: PricingTable::standard(),
        }
    }
}
