//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, error_page::ErrorPage, transaction::Field};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more required fields of a transaction were left empty.
    #[error("missing required fields: {0:?}")]
    MissingRequiredFields(Vec<Field>),

    /// The transaction could not be written to the sheet.
    ///
    /// The error string should only be logged for debugging on the server.
    /// The user is shown a general message asking them to try again.
    #[error("could not write to the sheet: {0}")]
    SheetWriteFailed(String),

    /// The sheet name in a request does not match any known sheet.
    #[error("\"{0}\" is not a valid sheet")]
    InvalidSheet(String),

    /// The credit or debit value in a request is neither "Credit" nor "Debit".
    #[error("\"{0}\" is not credit or debit")]
    InvalidCreditOrDebit(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => ErrorPage::internal_server_error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::unexpected().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidSheet(name) => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Invalid sheet".to_owned(),
                    details: format!(
                        "\"{name}\" is not a sheet. Choose either \"Kotak SRG\" or \"UBI SRG\"."
                    ),
                },
            ),
            Error::InvalidCreditOrDebit(value) => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Invalid transaction type".to_owned(),
                    details: format!(
                        "\"{value}\" is not a transaction type. Choose either \"Credit\" or \"Debit\"."
                    ),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{
        Error,
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    #[tokio::test]
    async fn invalid_sheet_is_a_bad_request_alert() {
        let response = Error::InvalidSheet("HDFC".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(
            text.contains("\"HDFC\" is not a sheet"),
            "want alert to name the invalid sheet, got {text:?}"
        );
    }

    #[tokio::test]
    async fn invalid_credit_or_debit_is_a_bad_request_alert() {
        let response = Error::InvalidCreditOrDebit("Transfer".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(
            text.contains("\"Transfer\" is not a transaction type"),
            "want alert to name the invalid value, got {text:?}"
        );
    }

    #[tokio::test]
    async fn unexpected_errors_render_internal_server_error_page() {
        let response = Error::SheetWriteFailed("timeout".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
