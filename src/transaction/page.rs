//! Defines the route handler for the data entry page.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    timezone::today,
    transaction::{entry::Field, form::TransactionForm, view::transaction_page_view},
};

/// The state needed for the data entry page.
#[derive(Debug, Clone)]
pub struct TransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
    /// Whether to fill in the date field with today's date.
    pub prefill_date: bool,
}

impl FromRef<AppState> for TransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            prefill_date: state.prefill_date,
        }
    }
}

/// Renders the data entry page with an empty form.
pub async fn get_transaction_page(
    State(state): State<TransactionPageState>,
) -> Result<Response, Error> {
    let mut form = TransactionForm::default();

    if state.prefill_date {
        form.update_field(Field::Date, today(&state.local_timezone)?.to_string());
    }

    Ok(transaction_page_view(&form).into_response())
}
