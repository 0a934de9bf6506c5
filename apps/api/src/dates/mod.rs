// Date Math Engine
// Implements: age/experience anniversaries, elapsed days and months, calendar
// breakdowns, productivity estimates, localized formatting, timelines.
// Every function takes `today` explicitly; handlers read it from a `Clock`.

pub mod calc;
pub mod clock;
pub mod locale;
pub mod timeline;

// Re-export the public API consumed by the presentation layer.
pub use calc::{
    age_in_years, detailed_age, detailed_experience, experience_years, parse_date,
    productivity_stats, Breakdown, DateMathError, ProductivityStats,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use locale::{format_date_ar, format_date_en};
