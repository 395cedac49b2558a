//! Defines the endpoint for submitting a transaction to a sheet.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    AppState,
    sheet::{Sheet, SheetWriter, SimulatedSheetWriter},
    transaction::{
        entry::{CreditOrDebit, Field},
        form::TransactionForm,
        view::transaction_form_view,
    },
};

/// The state needed to submit a transaction.
#[derive(Debug, Clone)]
pub struct SubmitTransactionState<W> {
    /// Writes submitted transactions to their sheet.
    pub sheet_writer: W,
}

impl FromRef<AppState> for SubmitTransactionState<SimulatedSheetWriter> {
    fn from_ref(state: &AppState) -> Self {
        Self {
            sheet_writer: state.sheet_writer.clone(),
        }
    }
}

/// The form data for submitting a transaction.
///
/// Missing fields are treated as empty so that the form, rather than the
/// extractor, decides what counts as incomplete.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransactionFormData {
    /// The name of the destination sheet. Uses the default sheet if omitted.
    pub sheet: Option<String>,
    pub date: String,
    pub particulars: String,
    pub credit_or_debit: String,
    pub amount: String,
    pub remarks: String,
}

impl TransactionFormData {
    fn into_fields(self) -> [(Field, String); 5] {
        [
            (Field::Date, self.date),
            (Field::Particulars, self.particulars),
            (Field::CreditOrDebit, self.credit_or_debit),
            (Field::Amount, self.amount),
            (Field::Remarks, self.remarks),
        ]
    }
}

/// A route handler for submitting a transaction.
///
/// Responds with the form re-rendered with the outcome of the submission: on
/// success the fields are cleared, otherwise they keep the submitted values.
pub async fn submit_transaction_endpoint<W: SheetWriter>(
    State(state): State<SubmitTransactionState<W>>,
    Form(mut data): Form<TransactionFormData>,
) -> Response {
    let sheet = match data.sheet.take().map(|name| name.parse::<Sheet>()) {
        None => Sheet::default(),
        Some(Ok(sheet)) => sheet,
        Some(Err(error)) => {
            tracing::error!("Rejected submission: {error}");
            return error.into_alert_response();
        }
    };

    // An empty value is left for the form to report as a missing field.
    if !data.credit_or_debit.is_empty()
        && let Err(error) = data.credit_or_debit.parse::<CreditOrDebit>()
    {
        tracing::error!("Rejected submission: {error}");
        return error.into_alert_response();
    }

    let mut form = TransactionForm::default();
    form.select_sheet(sheet);
    for (field, value) in data.into_fields() {
        form.update_field(field, value);
    }

    form.submit(&state.sheet_writer).await;

    transaction_form_view(&form).into_response()
}
