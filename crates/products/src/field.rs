//! Form fields of the product dialog and their per-field validation.

use core::str::FromStr;

use thiserror::Error;

use stockdesk_core::DomainError;

/// One editable attribute of a draft product.
///
/// The product id is deliberately absent: it is generated, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Price,
    StockQuantity,
    Rating,
}

impl FormField {
    /// Every field, in display order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Price,
        FormField::StockQuantity,
        FormField::Rating,
    ];

    /// Key used as the input's `name` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::StockQuantity => "stockQuantity",
            FormField::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Product Name",
            FormField::Price => "Product Price",
            FormField::StockQuantity => "Product Quantity",
            FormField::Rating => "Rating",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Price => "Price",
            FormField::StockQuantity => "Stock Quantity",
            FormField::Rating => "Rating",
        }
    }

    /// Whether the field's text is parsed into a number.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, FormField::Name)
    }

    /// HTML input type to render for this field.
    pub fn input_type(&self) -> &'static str {
        if self.is_numeric() { "number" } else { "text" }
    }
}

impl core::fmt::Display for FormField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown product field `{s}`")))
    }
}

/// Why a single field cannot be submitted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("this field is required")]
    Required,

    #[error("enter a valid number")]
    NotANumber,

    /// Parsed, but to NaN or an infinity.
    #[error("enter a finite number")]
    NotFinite,
}

/// Parse the text of a numeric input using standard decimal parsing.
pub(crate) fn parse_number(raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    let value: f64 = trimmed.parse().map_err(|_| FieldError::NotANumber)?;
    if !value.is_finite() {
        return Err(FieldError::NotFinite);
    }
    Ok(value)
}

/// Required free text; stored as typed, but blank-after-trim is missing.
pub(crate) fn require_text(raw: &str) -> Result<(), FieldError> {
    if raw.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}
