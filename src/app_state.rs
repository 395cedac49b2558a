//! Implements a struct that holds the state of the REST server.

use crate::{Error, sheet::SimulatedSheetWriter, timezone::get_local_offset};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,

    /// Whether new forms start with today's date filled in.
    pub prefill_date: bool,

    /// Writes submitted transactions to their sheet.
    pub sheet_writer: SimulatedSheetWriter,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(
        local_timezone: &str,
        prefill_date: bool,
        sheet_writer: SimulatedSheetWriter,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            prefill_date,
            sheet_writer,
        })
    }
}
