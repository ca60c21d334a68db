mod flat;

mod hourly;

mod rates;

mod strategy;

pub use flat::FlatFeePricing;
pub use hourly::HourlyPricing;
pub use rates::HourlyRates;
pub use strategy::PricingStrategy;
