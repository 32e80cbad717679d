use std::collections::BTreeMap;

use orderdesk_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Owned product store.
///
/// Products are keyed by identifier and never removed; identifiers are
/// assigned from 1 in creation order, so iteration over the map yields
/// products in the order they were registered.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
    next_id: ProductId,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: ProductId::FIRST,
        }
    }

    /// Register a product and assign it the next identifier.
    pub fn add(&mut self, name: impl Into<String>, unit_price: u64, stock: u32) -> ProductId {
        let id = self.next_id;
        self.next_id = id.next();
        self.products
            .insert(id, Product::new(id, name.into(), unit_price, stock));
        id
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Products in id (creation) order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Remove `quantity` units of `id` from stock.
    ///
    /// The only stock mutation. Fails without changing anything if the
    /// product is unknown or fewer units are available than requested, so
    /// the no-oversell invariant holds at the store boundary too.
    pub fn take_stock(&mut self, id: ProductId, quantity: u32) -> DomainResult<()> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(DomainError::UnknownProduct(id))?;

        if !product.has_stock(quantity) {
            return Err(DomainError::InsufficientStock {
                product_id: id,
                name: product.name().to_string(),
                requested: quantity,
                available: product.stock(),
            });
        }

        product.take(quantity);
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
