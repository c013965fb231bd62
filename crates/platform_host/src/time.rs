//! Wall-clock helpers shared by the taskbar clock, calendar and double-click detection.

use chrono::NaiveDateTime;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns the current local date and time.
///
/// In the browser this reads the local calendar fields from `Date`. Elsewhere there is no
/// timezone database, so UTC is reported.
pub fn local_datetime_now() -> NaiveDateTime {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        let local = chrono::NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .and_then(|date| date.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()));
        if let Some(local) = local {
            return local;
        }
    }

    utc_from_millis(unix_time_ms_now())
}

fn utc_from_millis(ms: u64) -> NaiveDateTime {
    chrono::DateTime::from_timestamp_millis(ms as i64)
        .unwrap_or_default()
        .naive_utc()
}
