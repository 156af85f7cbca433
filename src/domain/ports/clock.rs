//! Clock port - injectable wall time

use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" for timestamps on new entities
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
