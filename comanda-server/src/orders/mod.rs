//! Order Module
//!
//! The order ledger ties each order to one table and tracks whether it is
//! still open.
//!
//! # Open orders
//!
//! An order is open while `orderClosed` is false. The intended rule is "at
//! most one open order per table", but it is advisory: [`OrderLedger::create`]
//! does not look for an existing open order, and two concurrent creates for
//! the same table both succeed. [`OrderLedger::find_active_by_table`] then
//! returns whichever matching document the store yields first.
//!
//! # Data Flow
//!
//! ```text
//! API handler → OrderLedger → OrderRepository → DocumentStore
//! ```

pub mod ledger;

pub use ledger::OrderLedger;
