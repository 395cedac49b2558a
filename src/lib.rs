//! Sheet Entry is a web app for recording financial transactions in a sheet.
//!
//! This library provides a REST API that directly serves HTML pages. A single
//! data entry form collects the date, particulars, credit or debit, amount and
//! remarks of a transaction and submits them to one of two sheets.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod error;
mod error_page;
mod html;
mod routing;
mod sheet;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use error::Error;
pub use routing::build_router;
pub use sheet::{
    DEFAULT_SUBMIT_DELAY, Sheet, SheetRecord, SheetWriteRequest, SheetWriter,
    SimulatedSheetWriter,
};
pub use timezone::today;
pub use transaction::{
    CreditOrDebit, Field, FormEntry, SUBMISSION_ERROR_MESSAGE, StatusKind, SubmissionStatus,
    TransactionForm, VALIDATION_ERROR_MESSAGE,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
