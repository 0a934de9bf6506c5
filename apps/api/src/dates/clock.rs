use chrono::{Local, NaiveDate};

/// Source of "today" for every date calculation.
///
/// Carried in `AppState` as `Arc<dyn Clock>` so tests and reproducible runs
/// can pin the date without touching handler code.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date. Selected at startup via `PORTFOLIO_TODAY`.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
