//! Controlled draft state behind the "create product" dialog.

use thiserror::Error;

use stockdesk_core::{DomainResult, ProductId};

use crate::field::{FieldError, FormField, parse_number, require_text};
use crate::record::ProductRecord;

/// Text of a numeric input plus the result of parsing it.
#[derive(Debug, Clone, PartialEq)]
struct NumericInput {
    raw: String,
    parsed: Result<f64, FieldError>,
}

impl NumericInput {
    fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_number(&raw);
        Self { raw, parsed }
    }
}

/// An in-progress product, one per open dialog.
///
/// Every input displays exactly what [`ProductForm::value`] returns, so the
/// form is fully controlled by this state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    product_id: ProductId,
    name: String,
    price: NumericInput,
    stock_quantity: NumericInput,
    rating: NumericInput,
}

impl ProductForm {
    /// Fresh draft with a newly generated id.
    pub fn new() -> Self {
        Self::with_id(ProductId::new())
    }

    /// Fresh draft with a caller-chosen id (deterministic tests, restored drafts).
    pub fn with_id(product_id: ProductId) -> Self {
        Self {
            product_id,
            name: String::new(),
            price: NumericInput::new("0"),
            stock_quantity: NumericInput::new("0"),
            rating: NumericInput::new("0"),
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Replace the value of exactly one field.
    pub fn apply_change(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(product_id = %self.product_id, field = %field, "draft field changed");
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = NumericInput::new(value),
            FormField::StockQuantity => self.stock_quantity = NumericInput::new(value),
            FormField::Rating => self.rating = NumericInput::new(value),
        }
    }

    /// Change a field addressed by its input `name` attribute.
    ///
    /// Unknown keys are rejected and leave the draft untouched.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> DomainResult<()> {
        let field: FormField = key.parse()?;
        self.apply_change(field, value);
        Ok(())
    }

    /// The text currently shown in the field's input.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price.raw,
            FormField::StockQuantity => &self.stock_quantity.raw,
            FormField::Rating => &self.rating.raw,
        }
    }

    /// Parsed value of a numeric field; `None` for `Name`.
    pub fn number(&self, field: FormField) -> Option<Result<f64, FieldError>> {
        self.numeric(field).map(|input| input.parsed)
    }

    pub fn field_error(&self, field: FormField) -> Option<FieldError> {
        self.check(field).err()
    }

    pub fn is_valid(&self) -> bool {
        FormField::ALL.iter().all(|field| self.check(*field).is_ok())
    }

    /// Validate every field and build the finished record.
    ///
    /// All failing fields are reported together, in [`FormField::ALL`] order.
    pub fn validate(&self) -> Result<ProductRecord, FormErrors> {
        let errors: Vec<_> = FormField::ALL
            .into_iter()
            .filter_map(|field| self.check(field).err().map(|e| (field, e)))
            .collect();

        match (self.price.parsed, self.stock_quantity.parsed, self.rating.parsed) {
            (Ok(price), Ok(stock_quantity), Ok(rating)) if errors.is_empty() => {
                Ok(ProductRecord {
                    product_id: self.product_id,
                    name: self.name.clone(),
                    price,
                    stock_quantity,
                    rating,
                })
            }
            _ => Err(FormErrors { errors }),
        }
    }

    fn numeric(&self, field: FormField) -> Option<&NumericInput> {
        match field {
            FormField::Name => None,
            FormField::Price => Some(&self.price),
            FormField::StockQuantity => Some(&self.stock_quantity),
            FormField::Rating => Some(&self.rating),
        }
    }

    fn check(&self, field: FormField) -> Result<(), FieldError> {
        match self.numeric(field) {
            Some(input) => input.parsed.map(|_| ()),
            None => require_text(&self.name),
        }
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Every field that blocked a submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid product: {}", describe(.errors))]
pub struct FormErrors {
    errors: Vec<(FormField, FieldError)>,
}

fn describe(errors: &[(FormField, FieldError)]) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("{field}: {error}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.errors.iter().find(|(f, _)| *f == field).map(|(_, e)| *e)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.iter().map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(FormField, FieldError)> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
