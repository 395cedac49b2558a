//! The fields that describe a single transaction being entered.

use std::str::FromStr;

use crate::Error;

/// A field of a [FormEntry].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The date the transaction occurred.
    Date,
    /// Who the transaction was with, e.g. "Rent".
    Particulars,
    /// Whether money came in or went out.
    CreditOrDebit,
    /// The amount of money, entered with two decimal places.
    Amount,
    /// Optional notes about the transaction.
    Remarks,
}

impl Field {
    /// Every field in the order they appear on the form.
    pub const ALL: [Field; 5] = [
        Field::Date,
        Field::Particulars,
        Field::CreditOrDebit,
        Field::Amount,
        Field::Remarks,
    ];

    /// The name of the field in HTML forms.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Particulars => "particulars",
            Field::CreditOrDebit => "credit_or_debit",
            Field::Amount => "amount",
            Field::Remarks => "remarks",
        }
    }

    /// The human readable label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Particulars => "Particulars",
            Field::CreditOrDebit => "Credit or Debit",
            Field::Amount => "Amount",
            Field::Remarks => "Remarks",
        }
    }

    /// Whether the field must be filled in before the entry can be submitted.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Remarks)
    }
}

/// The direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditOrDebit {
    /// Money coming in.
    Credit,
    /// Money going out.
    Debit,
}

impl CreditOrDebit {
    /// The options offered to the user.
    pub const ALL: [CreditOrDebit; 2] = [CreditOrDebit::Credit, CreditOrDebit::Debit];

    /// The text stored in [FormEntry::credit_or_debit] for this option.
    pub fn name(&self) -> &'static str {
        match self {
            CreditOrDebit::Credit => "Credit",
            CreditOrDebit::Debit => "Debit",
        }
    }
}

impl FromStr for CreditOrDebit {
    type Err = Error;

    /// Parse an option from its name, e.g. "Credit".
    ///
    /// # Errors
    /// Returns [Error::InvalidCreditOrDebit] for anything other than "Credit" or "Debit".
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        CreditOrDebit::ALL
            .into_iter()
            .find(|option| option.name() == name)
            .ok_or_else(|| Error::InvalidCreditOrDebit(name.to_owned()))
    }
}

/// The values entered for a transaction.
///
/// Values are kept exactly as entered. Nothing is parsed or trimmed, so an
/// amount is still text at this point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEntry {
    /// The date in `YYYY-MM-DD` format.
    pub date: String,
    /// Who the transaction was with.
    pub particulars: String,
    /// "Credit", "Debit", or empty if not chosen yet.
    pub credit_or_debit: String,
    /// The amount, e.g. "15000.00".
    pub amount: String,
    /// Optional notes.
    pub remarks: String,
}

impl FormEntry {
    /// Get the current value of `field`.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Particulars => &self.particulars,
            Field::CreditOrDebit => &self.credit_or_debit,
            Field::Amount => &self.amount,
            Field::Remarks => &self.remarks,
        }
    }

    /// Set `field` to `value` as is.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Date => &mut self.date,
            Field::Particulars => &mut self.particulars,
            Field::CreditOrDebit => &mut self.credit_or_debit,
            Field::Amount => &mut self.amount,
            Field::Remarks => &mut self.remarks,
        };

        *slot = value.into();
    }

    /// The required fields that are empty, in form order.
    pub fn missing_required_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.field(*field).is_empty())
            .collect()
    }

    /// Check that every required field has been filled in.
    ///
    /// # Errors
    /// Returns [Error::MissingRequiredFields] listing the empty fields.
    pub fn validate(&self) -> Result<(), Error> {
        let missing = self.missing_required_fields();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequiredFields(missing))
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
