//! Comparators shared by the page views.
//!
//! All sorts in the crate go through `sort_by`, which is stable: records that
//! compare equal keep their catalog order.

use std::cmp::Ordering;

use crate::queries::schedule::Dated;
use crate::types::Event;

pub fn by_date_asc<T: Dated>(a: &T, b: &T) -> Ordering {
    a.instant().cmp(&b.instant())
}

pub fn by_date_desc<T: Dated>(a: &T, b: &T) -> Ordering {
    by_date_asc(b, a)
}

/// Chronological order of start times within a day.
pub fn by_start_time(a: &Event, b: &Event) -> Ordering {
    a.start_time.cmp(&b.start_time)
}
