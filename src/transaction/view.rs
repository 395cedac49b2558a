//! HTML rendering for the data entry page and form.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base, loading_spinner,
    },
    sheet::Sheet,
    transaction::{
        entry::{CreditOrDebit, Field},
        form::{StatusKind, SubmissionStatus, TransactionForm},
    },
};

/// The id of the sheet `<select>`, which lives outside the form so that it
/// survives the form being swapped out.
pub const SHEET_SELECT_ID: &str = "sheet";
/// The id of the form element that is replaced after each submission.
pub const FORM_ID: &str = "transaction-form";
/// The id of the message box inside the form.
pub const STATUS_ID: &str = "submission-status";

/// The full page with the sheet selector and the form.
pub fn transaction_page_view(form: &TransactionForm) -> Markup {
    let content = html! {
        div class="min-h-screen p-4 sm:p-8 flex items-center justify-center"
        {
            div class="w-full max-w-2xl p-6 sm:p-10 rounded-lg shadow-xl bg-white dark:bg-gray-800 text-gray-900 dark:text-white"
            {
                h1 class="mb-6 text-3xl font-bold text-center" { "Data Entry Form" }

                div class="mb-6" { (sheet_selector(form.sheet())) }

                (transaction_form_view(form))
            }
        }
    };

    base("Data Entry Form", &content)
}

fn sheet_selector(selected: Sheet) -> Markup {
    html! {
        label for=(SHEET_SELECT_ID) class=(FORM_LABEL_STYLE) { "Select Sheet:" }

        select
            id=(SHEET_SELECT_ID)
            name="sheet"
            class=(FORM_TEXT_INPUT_STYLE)
        {
            @for sheet in Sheet::ALL {
                option value=(sheet) selected[sheet == selected] { (sheet) }
            }
        }
    }
}

/// The form fields, the status message and the submit button.
///
/// This is also the response to a submission, so it carries its own htmx
/// attributes for replacing itself.
pub fn transaction_form_view(form: &TransactionForm) -> Markup {
    let spinner = loading_spinner();

    html! {
        form
            id=(FORM_ID)
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-include={ "#" (SHEET_SELECT_ID) }
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            "hx-on::before-request"={ "document.getElementById('" (STATUS_ID) "')?.remove()" }
            class="space-y-4"
        {
            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { (Field::Date.label()) ":" }

                input
                    type="date"
                    id="date"
                    name=(Field::Date.name())
                    value=(form.field(Field::Date))
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="particulars" class=(FORM_LABEL_STYLE) { (Field::Particulars.label()) ":" }

                input
                    type="text"
                    id="particulars"
                    name=(Field::Particulars.name())
                    placeholder="e.g., Restaurant, Amazon, Rent"
                    value=(form.field(Field::Particulars))
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="credit-debit" class=(FORM_LABEL_STYLE) { (Field::CreditOrDebit.label()) ":" }

                (credit_or_debit_select(form.field(Field::CreditOrDebit)))
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { (Field::Amount.label()) ":" }

                input
                    type="number"
                    id="amount"
                    name=(Field::Amount.name())
                    placeholder="Enter amount"
                    step="0.01"
                    value=(form.field(Field::Amount))
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="remarks" class=(FORM_LABEL_STYLE) { (Field::Remarks.label()) ":" }

                input
                    type="text"
                    id="remarks"
                    name=(Field::Remarks.name())
                    placeholder="e.g., Uber, Swiggy, etc."
                    value=(form.field(Field::Remarks))
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if let Some(status) = form.status() {
                (status_message(status))
            }

            div class="mt-6"
            {
                button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    "Add Transaction"
                }
            }
        }
    }
}

fn credit_or_debit_select(current: &str) -> Markup {
    html! {
        select
            id="credit-debit"
            name=(Field::CreditOrDebit.name())
            required
            class=(FORM_TEXT_INPUT_STYLE)
        {
            option value="" selected[current.is_empty()] { "Select Type" }

            @for choice in CreditOrDebit::ALL {
                option value=(choice.name()) selected[current == choice.name()] { (choice.name()) }
            }
        }
    }
}

fn status_message(status: &SubmissionStatus) -> Markup {
    let style = match status.kind {
        StatusKind::Success => "p-4 rounded-lg text-center bg-green-100 text-green-700",
        StatusKind::Error => "p-4 rounded-lg text-center bg-red-100 text-red-700",
    };

    html! {
        div id=(STATUS_ID) role="status" class=(style) { (status.message) }
    }
}
