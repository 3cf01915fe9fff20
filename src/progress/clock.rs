use crate::config::DayBoundary;
use chrono::{Local, NaiveDate, Utc};

/// Fuente del "hoy" usado por la racha.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock {
    boundary: DayBoundary,
}

impl SystemClock {
    pub fn new(boundary: DayBoundary) -> Self {
        Self { boundary }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.boundary {
            DayBoundary::Utc => Utc::now().date_naive(),
            DayBoundary::Local => Local::now().date_naive(),
        }
    }
}

#[cfg(test)]
pub use fixed::FixedClock;
