//! Presentation tuning values and external endpoints, kept in one place so
//! the page code never carries magic numbers.

/// External storefront all buy buttons point at.
pub const STORE_URL: &str = "https://veltraxx.com/";

/// Scroll offset (px) past which the navbar switches to its solid treatment.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fraction of a reveal block that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Rate at which the hero background trails the scroll position.
pub const HERO_PARALLAX_RATE: f64 = 0.5;

/// Rate for the lifestyle section background, relative to the section top.
pub const LIFESTYLE_PARALLAX_RATE: f64 = 0.25;
