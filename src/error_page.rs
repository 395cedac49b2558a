//! Full page responses for requests that cannot be served, e.g. 404 and 500 pages.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

pub struct ErrorPage<'a> {
    status: StatusCode,
    description: &'a str,
    fix: &'a str,
}

impl<'a> ErrorPage<'a> {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. Check the address or head back to the form.",
        }
    }

    pub fn internal_server_error(description: &'a str, fix: &'a str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description,
            fix,
        }
    }

    pub fn unexpected() -> Self {
        Self::internal_server_error(
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        )
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let title = self.status.canonical_reason().unwrap_or("Error");
        let page = error_view(title, self.status.as_str(), self.description, self.fix);

        (self.status, Html(page.into_string())).into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::unexpected().into_response()
}
