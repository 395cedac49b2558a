//! Defines the interface for writing a transaction to a sheet and the simulated writer.

use std::{future::Future, time::Duration};

use serde::Serialize;

use crate::{Error, sheet::Sheet, transaction::FormEntry};

/// How long [SimulatedSheetWriter] waits by default to mimic a network round trip.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// A single transaction as it would appear as a row in a sheet.
///
/// The field names match the column headings in the sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetRecord {
    /// The date the transaction occurred.
    #[serde(rename = "Date")]
    pub date: String,
    /// Who the transaction was with.
    #[serde(rename = "Particulars")]
    pub particulars: String,
    /// Either "Credit" or "Debit".
    #[serde(rename = "Credit or Debit")]
    pub credit_or_debit: String,
    /// The amount as entered, e.g. "15000.00".
    #[serde(rename = "Amount")]
    pub amount: String,
    /// Optional notes.
    #[serde(rename = "Remarks")]
    pub remarks: String,
}

impl From<&FormEntry> for SheetRecord {
    fn from(entry: &FormEntry) -> Self {
        Self {
            date: entry.date.clone(),
            particulars: entry.particulars.clone(),
            credit_or_debit: entry.credit_or_debit.clone(),
            amount: entry.amount.clone(),
            remarks: entry.remarks.clone(),
        }
    }
}

/// A request to append a transaction to a sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetWriteRequest {
    /// The sheet to write to.
    pub sheet: Sheet,
    /// The row to append.
    pub data: SheetRecord,
}

impl SheetWriteRequest {
    /// Create a request to write `entry` to `sheet`.
    pub fn new(sheet: Sheet, entry: &FormEntry) -> Self {
        Self {
            sheet,
            data: SheetRecord::from(entry),
        }
    }
}

/// Writes transactions to a sheet.
///
/// A write either succeeds completely or fails without writing anything.
pub trait SheetWriter: Clone + Send + Sync + 'static {
    /// Append the transaction in `request` to its sheet.
    ///
    /// # Errors
    /// Implementers should return [Error::SheetWriteFailed] if the transaction
    /// could not be written.
    fn write(&self, request: &SheetWriteRequest)
    -> impl Future<Output = Result<(), Error>> + Send;
}

/// A [SheetWriter] that waits for a fixed delay and then reports success
/// without contacting any spreadsheet service.
#[derive(Debug, Clone)]
pub struct SimulatedSheetWriter {
    delay: Duration,
}

impl SimulatedSheetWriter {
    /// Create a writer that takes `delay` to complete each write.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The time each write takes.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSheetWriter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl SheetWriter for SimulatedSheetWriter {
    async fn write(&self, request: &SheetWriteRequest) -> Result<(), Error> {
        let payload = serde_json::to_string(request).map_err(|error| {
            Error::SheetWriteFailed(format!("could not serialize the request: {error}"))
        })?;

        tokio::time::sleep(self.delay).await;

        tracing::info!("Simulating data entry for sheet: {}", request.sheet);
        tracing::debug!("Sheet write payload: {payload}");

        Ok(())
    }
}
