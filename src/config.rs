use log::Level;

pub const BRAND_NAME: &str = "Insightexus";
pub const BRAND_TAGLINE: &str = "Innovating The Future";

pub const CONTACT_EMAIL: &str = "hello@insightexus.com";
pub const CAREERS_EMAIL: &str = "careers@insightexus.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_LOCATION: &str = "San Francisco, CA";

/// Auto-advance period of the testimonial carousel.
pub const TESTIMONIAL_INTERVAL_MS: u32 = 5000;
/// How long a carousel move holds the busy flag.
pub const TRANSITION_MS: u32 = 500;

pub const RELATED_LIMIT: usize = 3;

pub const PRELOADER_MS: f64 = 1600.0;
pub const COUNT_UP_MS: f64 = 950.0;
// Portion of an element that must be visible before its entrance plays.
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
