//! The data entry form for transactions.
//!
//! This module contains everything related to entering a transaction:
//! - The `FormEntry` fields and the `TransactionForm` that validates and submits them
//! - The HTML views for the page and the form
//! - The route handlers for showing the page and submitting the form

mod entry;
mod form;
mod page;
mod submit_endpoint;
mod view;

pub use entry::{CreditOrDebit, Field, FormEntry};
pub use form::{
    SUBMISSION_ERROR_MESSAGE, StatusKind, SubmissionStatus, TransactionForm,
    VALIDATION_ERROR_MESSAGE,
};
pub use page::get_transaction_page;
pub use submit_endpoint::submit_transaction_endpoint;
