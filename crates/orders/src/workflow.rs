//! Order placement workflow.
//!
//! Validates a proposed order against current stock and commits it as a
//! whole: every line is checked before any stock moves, so a rejected order
//! leaves the catalog exactly as it was.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_catalog::Catalog;
use orderdesk_core::{DomainError, DomainResult, ProductId};

use crate::ledger::Ledger;
use crate::order::{Order, OrderLine};

/// One requested product/quantity pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A proposed order: the line requests the shell collects before commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    lines: Vec<LineRequest>,
}

impl OrderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, product_id: ProductId, quantity: u32) {
        self.lines.push(LineRequest {
            product_id,
            quantity,
        });
    }

    pub fn lines(&self) -> &[LineRequest] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Validate `request` against the catalog and commit it all-or-nothing.
///
/// Quantities are accounted per product across the whole request, so two
/// lines for the same product cannot oversell it between them. On success
/// stock is decremented for every line and the committed order is returned.
pub fn place_order<'a>(
    catalog: &mut Catalog,
    ledger: &'a mut Ledger,
    request: &OrderRequest,
    placed_at: DateTime<Utc>,
) -> DomainResult<&'a Order> {
    if request.is_empty() {
        return Err(DomainError::EmptyOrder);
    }

    // Phase 1: validate every line before touching any stock.
    let mut reserved: BTreeMap<ProductId, u32> = BTreeMap::new();
    for line in request.lines() {
        if line.quantity == 0 {
            return Err(DomainError::validation(format!(
                "quantity for product {} must be positive",
                line.product_id
            )));
        }

        let product = catalog
            .get(line.product_id)
            .ok_or(DomainError::UnknownProduct(line.product_id))?;

        let already = reserved.get(&line.product_id).copied().unwrap_or(0);
        // `already` never exceeds stock, so this subtraction cannot wrap.
        let remaining = product.stock() - already;
        if line.quantity > remaining {
            return Err(DomainError::InsufficientStock {
                product_id: line.product_id,
                name: product.name().to_string(),
                requested: line.quantity,
                available: remaining,
            });
        }
        reserved.insert(line.product_id, already + line.quantity);
    }

    // Phase 2: commit. Every line was validated, so the decrements succeed.
    let mut lines = Vec::with_capacity(request.lines().len());
    for (index, line) in request.lines().iter().enumerate() {
        let product = catalog
            .get(line.product_id)
            .ok_or(DomainError::UnknownProduct(line.product_id))?;
        let name = product.name().to_string();
        let unit_price = product.unit_price();

        catalog.take_stock(line.product_id, line.quantity)?;

        lines.push(OrderLine {
            line_no: index as u32 + 1,
            product_id: line.product_id,
            name,
            quantity: line.quantity,
            unit_price,
        });
    }

    Ok(ledger.commit(lines, placed_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn placed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    fn request(lines: &[(ProductId, u32)]) -> OrderRequest {
        let mut request = OrderRequest::new();
        for (product_id, quantity) in lines {
            request.push(*product_id, *quantity);
        }
        request
    }

    #[test]
    fn ordering_full_stock_commits_and_empties_it() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        let laptop = catalog.add("Laptop", 99_900, 5);

        let order = place_order(
            &mut catalog,
            &mut ledger,
            &request(&[(laptop, 5)]),
            placed_at(),
        )
        .unwrap();

        assert_eq!(order.id().value(), 1);
        assert_eq!(order.total(), 499_500);
        assert_eq!(catalog.get(laptop).unwrap().stock(), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn oversell_is_rejected_and_stock_unchanged() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        let phone = catalog.add("Phone", 49_900, 10);

        let err = place_order(
            &mut catalog,
            &mut ledger,
            &request(&[(phone, 11)]),
            placed_at(),
        )
        .unwrap_err();

        match err {
            DomainError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 11);
                assert_eq!(available, 10);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
        assert_eq!(catalog.get(phone).unwrap().stock(), 10);
        assert!(ledger.is_empty());
    }

    #[test]
    fn a_failing_line_leaves_earlier_lines_untouched() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        let laptop = catalog.add("Laptop", 99_900, 5);
        let phone = catalog.add("Phone", 49_900, 10);

        let err = place_order(
            &mut catalog,
            &mut ledger,
            &request(&[(laptop, 2), (phone, 11)]),
            placed_at(),
        )
        .unwrap_err();

        assert!(matches!(err, DomainError::InsufficientStock { .. }));
        // The laptop line validated fine, but nothing was committed for it.
        assert_eq!(catalog.get(laptop).unwrap().stock(), 5);
        assert_eq!(catalog.get(phone).unwrap().stock(), 10);
        assert!(ledger.is_empty());
    }

    #[test]
    fn repeated_product_lines_are_accounted_together() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        let laptop = catalog.add("Laptop", 99_900, 5);

        let err = place_order(
            &mut catalog,
            &mut ledger,
            &request(&[(laptop, 3), (laptop, 3)]),
            placed_at(),
        )
        .unwrap_err();

        match err {
            DomainError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 3);
                // Only 2 remain after the first line's reservation.
                assert_eq!(available, 2);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
        assert_eq!(catalog.get(laptop).unwrap().stock(), 5);
    }

    #[test]
    fn repeated_product_lines_within_stock_commit() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        let laptop = catalog.add("Laptop", 99_900, 5);

        let order = place_order(
            &mut catalog,
            &mut ledger,
            &request(&[(laptop, 3), (laptop, 2)]),
            placed_at(),
        )
        .unwrap();

        assert_eq!(order.lines().len(), 2);
        assert_eq!(catalog.get(laptop).unwrap().stock(), 0);
    }

    #[test]
    fn unknown_product_is_rejected() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        catalog.add("Laptop", 99_900, 5);

        let missing = ProductId::new(42);
        let err = place_order(
            &mut catalog,
            &mut ledger,
            &request(&[(missing, 1)]),
            placed_at(),
        )
        .unwrap_err();

        assert_eq!(err, DomainError::UnknownProduct(missing));
        assert!(ledger.is_empty());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        let laptop = catalog.add("Laptop", 99_900, 5);

        let err = place_order(
            &mut catalog,
            &mut ledger,
            &request(&[(laptop, 0)]),
            placed_at(),
        )
        .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(catalog.get(laptop).unwrap().stock(), 5);
    }

    #[test]
    fn empty_request_is_rejected() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();

        let err = place_order(
            &mut catalog,
            &mut ledger,
            &OrderRequest::new(),
            placed_at(),
        )
        .unwrap_err();

        assert_eq!(err, DomainError::EmptyOrder);
    }

    #[test]
    fn successive_orders_get_increasing_ids() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        let laptop = catalog.add("Laptop", 99_900, 9);

        for expected in 1..=3u32 {
            let id = place_order(
                &mut catalog,
                &mut ledger,
                &request(&[(laptop, 3)]),
                placed_at(),
            )
            .unwrap()
            .id();
            assert_eq!(id.value(), expected);
        }
    }

    #[test]
    fn committed_lines_snapshot_name_and_price() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        let laptop = catalog.add("Laptop", 99_900, 5);

        let order = place_order(
            &mut catalog,
            &mut ledger,
            &request(&[(laptop, 2)]),
            placed_at(),
        )
        .unwrap();

        let line = &order.lines()[0];
        assert_eq!(line.line_no, 1);
        assert_eq!(line.name, "Laptop");
        assert_eq!(line.unit_price, 99_900);
        assert_eq!(line.subtotal(), 199_800);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: whatever the requested quantity, stock never goes
            /// negative and a rejection changes nothing.
            #[test]
            fn stock_never_oversold(stock in 0u32..100, quantity in 1u32..200) {
                let mut catalog = Catalog::new();
                let mut ledger = Ledger::new();
                let id = catalog.add("Widget", 1_000, stock);

                let result = place_order(
                    &mut catalog,
                    &mut ledger,
                    &request(&[(id, quantity)]),
                    placed_at(),
                );

                let remaining = catalog.get(id).unwrap().stock();
                if quantity <= stock {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(remaining, stock - quantity);
                    prop_assert_eq!(ledger.len(), 1);
                } else {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(remaining, stock);
                    prop_assert!(ledger.is_empty());
                }
            }
        }
    }
}
