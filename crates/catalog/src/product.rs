use serde::{Deserialize, Serialize};

use storefront_core::{Amount, DomainError, DomainResult, Entity, ProductId};

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    offer_price: Amount,
    in_stock: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        offer_price: Amount,
        in_stock: bool,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }

        Ok(Self {
            id,
            name,
            category: category.into(),
            offer_price,
            in_stock,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category label; empty when the backend did not provide one.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Unit price the storefront currently sells at.
    pub fn offer_price(&self) -> Amount {
        self.offer_price
    }

    pub fn is_in_stock(&self) -> bool {
        self.in_stock
    }

    /// Revenue for `quantity` units at the current offer price.
    pub fn line_revenue(&self, quantity: u32) -> Amount {
        self.offer_price.times(quantity)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
