//! The API endpoints URIs.

/// The root route which shows the data entry form.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for submitting a transaction to a sheet.
pub const TRANSACTIONS_API: &str = "/api/transactions";
