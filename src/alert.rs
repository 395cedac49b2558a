//! Alerts for request-level errors.
//!
//! An alert replaces the `#alert-container` element of the page shell when a
//! request fails outright, e.g. because it named an unknown sheet.
//! Messages about a submission itself are shown inside the form instead.

use axum::response::Html;
use maud::{Markup, html};

use crate::html::alert_container;

/// An error alert with a headline and an explanation.
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    pub fn into_html(self) -> Html<String> {
        Html(alert_container(self.markup()).into_string())
    }

    fn markup(&self) -> Markup {
        html! {
            div
                role="alert"
                class="flex items-start gap-3 p-4 mb-4 text-sm rounded-lg shadow-lg
                    text-red-800 bg-red-50 border border-red-300
                    dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            {
                div class="flex-1"
                {
                    p class="font-semibold" { (self.message) }

                    @if !self.details.is_empty() {
                        p { (self.details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                    class="font-bold"
                {
                    "×"
                }
            }
        }
    }
}
