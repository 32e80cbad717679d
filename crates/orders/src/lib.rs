//! Orders domain module.
//!
//! The order data model (lines, totals, delivery dates), the placement
//! workflow, and the append-only ledger of committed orders. Pure domain
//! logic; the console shell lives elsewhere.

pub mod ledger;
pub mod order;
pub mod workflow;

pub use ledger::Ledger;
pub use order::{delivery_due, Order, OrderLine};
pub use workflow::{place_order, LineRequest, OrderRequest};
