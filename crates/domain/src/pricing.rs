// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::money::Money;
use crate::service::Service;
use std::collections::BTreeMap;

/// A named pricing tier (e.g. `Regular`, `VIP`, `Senior`).
///
/// Ticket types are configuration data; the engine never hardcodes them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicketType(String);

impl TicketType {
    /// Creates a ticket type from its configured name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_string())
    }

    /// Returns the tier name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discount applied against the Regular base price, in basis points.
///
/// Rates live strictly inside (0, 1); a configured value of 1 or more is a
/// flat price, not a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscountRate(u16);

impl DiscountRate {
    /// Creates a rate from basis points (1-9999).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDiscountRate` for 0 or >= 10000.
    pub const fn from_basis_points(basis_points: u16) -> Result<Self, DomainError> {
        if basis_points == 0 || basis_points >= 10_000 {
            return Err(DomainError::InvalidDiscountRate { basis_points });
        }
        Ok(Self(basis_points))
    }

    /// Returns the rate in basis points.
    #[must_use]
    pub const fn basis_points(&self) -> u16 {
        self.0
    }

    /// Applies the discount to a base amount: `base * (1 - rate)`,
    /// truncating to the centavo.
    #[must_use]
    pub const fn apply(&self, base: Money) -> Money {
        let kept: i64 = 10_000 - self.0 as i64;
        Money::from_centavos(base.centavos() * kept / 10_000)
    }
}

impl std::fmt::Display for DiscountRate {
    /// Renders as a percentage, e.g. `20%` for 2000 basis points.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole: u16 = self.0 / 100;
        let frac: u16 = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

/// How a ticket type is priced: a discount against the Regular base, or a
/// flat override amount that replaces the final price outright.
///
/// Configuration stores one raw number per tier; the dual interpretation
/// (fractions in (0,1) are discounts, values >= 1 are flat prices) is
/// resolved once at load time into this union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingEntry {
    /// Final price is the Regular base minus this discount.
    Discount(DiscountRate),
    /// Final price is this fixed amount; the Regular base is still quoted
    /// for comparison.
    Flat(Money),
}

impl PricingEntry {
    /// Resolves a raw configured peso value into an entry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPricingValue` for zero, negative, or
    /// non-finite values.
    pub fn from_raw(ticket_type: &str, value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidPricingValue {
                ticket_type: ticket_type.to_string(),
                reason: format!("value must be a positive number, got {value}"),
            });
        }

        if value < 1.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let basis_points: u16 = (value * 10_000.0).round() as u16;
            let rate: DiscountRate = DiscountRate::from_basis_points(basis_points)?;
            Ok(Self::Discount(rate))
        } else {
            Ok(Self::Flat(Money::from_peso_value(value)))
        }
    }
}

/// A priced quote for one (service, ticket type) pair.
///
/// The base is always the service's Regular price; the final price is what
/// the customer pays. Both appear on receipts, so the distinction must be
/// preserved even for flat-priced tiers where final exceeds base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// The service's Regular base price.
    pub base_price: Money,
    /// The amount actually charged for this tier.
    pub final_price: Money,
}

/// The pricing configuration of one service: the Regular base price and
/// the ordered set of configured tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePricing {
    regular: Money,
    entries: Vec<(TicketType, PricingEntry)>,
}

impl ServicePricing {
    /// Creates a pricing set with the given Regular base price. The
    /// `Regular` tier itself is inserted as a flat entry at the base.
    #[must_use]
    pub fn new(regular: Money) -> Self {
        Self {
            regular,
            entries: vec![(TicketType::new("Regular"), PricingEntry::Flat(regular))],
        }
    }

    /// Adds or replaces a tier.
    pub fn set_entry(&mut self, ticket_type: TicketType, entry: PricingEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|(t, _)| *t == ticket_type) {
            existing.1 = entry;
        } else {
            self.entries.push((ticket_type, entry));
        }
    }

    /// Returns the Regular base price.
    #[must_use]
    pub const fn regular(&self) -> Money {
        self.regular
    }

    /// Returns the configured tiers in configuration order.
    #[must_use]
    pub fn ticket_types(&self) -> Vec<&TicketType> {
        self.entries.iter().map(|(t, _)| t).collect()
    }

    fn entry(&self, ticket_type: &TicketType) -> Option<PricingEntry> {
        self.entries
            .iter()
            .find(|(t, _)| t == ticket_type)
            .map(|(_, e)| *e)
    }
}

/// Base price and discount policy per service and ticket type.
///
/// Loaded once at startup from configuration; see the engine crate's
/// config module for the raw format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTable {
    services: BTreeMap<Service, ServicePricing>,
}

impl PricingTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            services: BTreeMap::new(),
        }
    }

    /// Installs the pricing set for a service, replacing any existing one.
    pub fn set_service(&mut self, service: Service, pricing: ServicePricing) {
        self.services.insert(service, pricing);
    }

    /// Returns the pricing set for a service.
    #[must_use]
    pub fn service(&self, service: Service) -> Option<&ServicePricing> {
        self.services.get(&service)
    }

    /// Quotes a (service, ticket type) pair.
    ///
    /// The base price is always the service's Regular price. For discount
    /// tiers the final price is `base * (1 - rate)`; for flat tiers the
    /// final price is the configured amount, which may exceed the base.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownService` if the service has no pricing
    /// configured, or `DomainError::UnknownTicketType` if the tier is not
    /// configured for the service.
    pub fn quote(&self, service: Service, ticket_type: &TicketType) -> Result<Quote, DomainError> {
        let pricing: &ServicePricing = self
            .services
            .get(&service)
            .ok_or_else(|| DomainError::UnknownService(service.key().to_string()))?;

        let entry: PricingEntry =
            pricing
                .entry(ticket_type)
                .ok_or_else(|| DomainError::UnknownTicketType {
                    service: service.name().to_string(),
                    ticket_type: ticket_type.as_str().to_string(),
                })?;

        let base_price: Money = pricing.regular();
        let final_price: Money = match entry {
            PricingEntry::Discount(rate) => rate.apply(base_price),
            PricingEntry::Flat(amount) => amount,
        };

        Ok(Quote {
            base_price,
            final_price,
        })
    }

    /// The stock pricing table shipped with the system.
    ///
    /// Regular/VIP are flat per service; Senior, Student, PWD, and Child
    /// are discounts shared by all services.
    ///
    /// # Panics
    ///
    /// Never panics; the built-in rates are statically valid.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn standard() -> Self {
        let discounts: [(&str, u16); 4] = [
            ("Senior", 2_000),
            ("Student", 1_000),
            ("PWD", 2_000),
            ("Child", 5_000),
        ];

        let bases: [(Service, i64, i64); 3] = [
            (Service::Cinema, 150, 300),
            (Service::Bus, 100, 150),
            (Service::Airplane, 1_200, 2_000),
        ];

        let mut table: Self = Self::new();
        for (service, regular, vip) in bases {
            let mut pricing: ServicePricing = ServicePricing::new(Money::from_pesos(regular));
            pricing.set_entry(
                TicketType::new("VIP"),
                PricingEntry::Flat(Money::from_pesos(vip)),
            );
            for (name, basis_points) in discounts {
                // Static rates validated at construction.
                if let Ok(rate) = DiscountRate::from_basis_points(basis_points) {
                    pricing.set_entry(TicketType::new(name), PricingEntry::Discount(rate));
                }
            }
            table.set_service(service, pricing);
        }
        table
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::new()
    }
}
