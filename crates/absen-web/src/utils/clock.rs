//! Wall-clock access through the JS `Date` object

use chrono::{FixedOffset, Offset, Utc};

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Browser time zone as a fixed offset. `getTimezoneOffset` counts minutes
/// west of UTC.
pub fn local_offset() -> FixedOffset {
    let minutes = js_sys::Date::new_0().get_timezone_offset();
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
