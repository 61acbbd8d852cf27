use serde::{Deserialize, Serialize};

use stockdesk_core::{Entity, ProductId};

/// A finalized product, produced by a successful form submission.
///
/// Numeric fields are always finite; construction goes through
/// [`ProductForm::validate`](crate::ProductForm::validate). Serialized with the
/// camelCase keys the inventory API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock_quantity: f64,
    pub rating: f64,
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}
