use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in `canonical_timezone`, e.g. "Asia/Kolkata".
///
/// The date displays as `YYYY-MM-DD`, the format used by date inputs.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a
/// known timezone.
pub fn today(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {canonical_timezone}");
        Error::InvalidTimezoneError(canonical_timezone.to_owned())
    })?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use crate::Error;

    use super::{get_local_offset, today};

    #[test]
    fn utc_has_zero_offset() {
        assert_eq!(get_local_offset("Etc/UTC").map(|offset| offset.is_utc()), Some(true));
    }

    #[test]
    fn today_in_utc_matches_clock() {
        let want = OffsetDateTime::now_utc().date();

        let got = today("Etc/UTC").unwrap();

        // Allow for the test running across midnight.
        assert!(
            got == want || got == want.next_day().unwrap(),
            "want {want}, got {got}"
        );
    }

    #[test]
    fn today_formats_as_iso_date() {
        let date = today("Asia/Kolkata").unwrap().to_string();

        assert_eq!(date.len(), 10, "want YYYY-MM-DD, got {date}");
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[7..8], "-");
    }

    #[test]
    fn today_rejects_unknown_timezone() {
        assert_eq!(
            today("Mars/Olympus_Mons"),
            Err(Error::InvalidTimezoneError("Mars/Olympus_Mons".to_owned()))
        );
    }
}
