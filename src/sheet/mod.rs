//! The spreadsheets that a transaction can be sent to.
//!
//! A [Sheet] names the destination of a submitted transaction and a
//! [SheetWriter] performs the write. The only writer shipped with the app,
//! [SimulatedSheetWriter], stands in for a real spreadsheet client.

mod writer;

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

pub use writer::{
    DEFAULT_SUBMIT_DELAY, SheetRecord, SheetWriteRequest, SheetWriter, SimulatedSheetWriter,
};

/// A named spreadsheet that transactions are written to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sheet {
    /// The sheet for the Kotak account.
    #[default]
    #[serde(rename = "Kotak SRG")]
    KotakSrg,
    /// The sheet for the UBI account.
    #[serde(rename = "UBI SRG")]
    UbiSrg,
}

impl Sheet {
    /// Every sheet, in the order they are offered to the user.
    pub const ALL: [Sheet; 2] = [Sheet::KotakSrg, Sheet::UbiSrg];

    /// The display name of the sheet, e.g. "Kotak SRG".
    pub fn name(&self) -> &'static str {
        match self {
            Sheet::KotakSrg => "Kotak SRG",
            Sheet::UbiSrg => "UBI SRG",
        }
    }
}

impl Display for Sheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sheet {
    type Err = Error;

    /// Parse a sheet from its display name.
    ///
    /// # Errors
    /// Returns [Error::InvalidSheet] if `name` is not the name of a sheet.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Sheet::ALL
            .into_iter()
            .find(|sheet| sheet.name() == name)
            .ok_or_else(|| Error::InvalidSheet(name.to_owned()))
    }
}
