use serde::{Deserialize, Serialize};

use orderdesk_core::ProductId;

/// A sellable product and its current stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    unit_price: u64,
    stock: u32,
}

impl Product {
    pub(crate) fn new(id: ProductId, name: String, unit_price: u64, stock: u32) -> Self {
        Self {
            id,
            name,
            unit_price,
            stock,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Whether `quantity` units can currently be taken.
    pub fn has_stock(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }

    /// Remove units from stock. Callers must have checked availability.
    pub(crate) fn take(&mut self, quantity: u32) {
        self.stock -= quantity;
    }
}
