//! Domain types for the receipt points service

pub mod receipt;

pub use receipt::{Item, Receipt, ReceiptId};
