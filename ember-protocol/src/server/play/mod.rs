mod inventory_transaction;

pub use inventory_transaction::*;
