//! The state of the data entry form and the submission flow.

use crate::{
    sheet::{Sheet, SheetWriteRequest, SheetWriter},
    transaction::entry::{Field, FormEntry},
};

/// Shown when a required field is empty.
pub const VALIDATION_ERROR_MESSAGE: &str = "Please fill in all required fields.";

/// Shown when the sheet could not be written to.
pub const SUBMISSION_ERROR_MESSAGE: &str =
    "An error occurred. Please check your network and try again.";

/// Whether a submission attempt succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// The entry was written to the sheet.
    Success,
    /// The entry was rejected or could not be written.
    Error,
}

/// The message shown to the user after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionStatus {
    /// The text shown to the user.
    pub message: String,
    /// Decides how the message is styled.
    pub kind: StatusKind,
}

impl SubmissionStatus {
    fn submitted_to(sheet: Sheet) -> Self {
        Self {
            message: format!("Transaction data successfully submitted to the \"{sheet}\" sheet."),
            kind: StatusKind::Success,
        }
    }

    fn error(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            kind: StatusKind::Error,
        }
    }
}

/// A data entry form for a single transaction.
///
/// The form starts with the default sheet, an empty entry and no status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    sheet: Sheet,
    entry: FormEntry,
    status: Option<SubmissionStatus>,
}

impl TransactionForm {
    /// The sheet the entry will be submitted to.
    pub fn sheet(&self) -> Sheet {
        self.sheet
    }

    /// Change the destination sheet. The entry is left as is.
    pub fn select_sheet(&mut self, sheet: Sheet) {
        self.sheet = sheet;
    }

    /// The values entered so far.
    pub fn entry(&self) -> &FormEntry {
        &self.entry
    }

    /// Get the current value of `field`.
    pub fn field(&self, field: Field) -> &str {
        self.entry.field(field)
    }

    /// Set `field` to `value` without any validation.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.entry.update_field(field, value);
    }

    /// The outcome of the last submission attempt, if any.
    pub fn status(&self) -> Option<&SubmissionStatus> {
        self.status.as_ref()
    }

    /// Validate the entry and write it to the selected sheet with `writer`.
    ///
    /// The previous status is cleared before anything else happens. If a
    /// required field is empty, `writer` is not called. The entry is cleared
    /// only when the write succeeds, otherwise the values are kept so the user
    /// can correct them and try again.
    pub async fn submit<W: SheetWriter>(&mut self, writer: &W) -> &SubmissionStatus {
        self.status = None;

        if let Err(error) = self.entry.validate() {
            tracing::debug!("Rejected entry for sheet {}: {error}", self.sheet);
            return self
                .status
                .insert(SubmissionStatus::error(VALIDATION_ERROR_MESSAGE));
        }

        let request = SheetWriteRequest::new(self.sheet, &self.entry);

        let status = match writer.write(&request).await {
            Ok(()) => {
                self.entry.reset();
                SubmissionStatus::submitted_to(self.sheet)
            }
            Err(error) => {
                tracing::error!("Error submitting form: {error}");
                SubmissionStatus::error(SUBMISSION_ERROR_MESSAGE)
            }
        };

        self.status.insert(status)
    }
}
