use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Viewer {0} interacted with a container it does not have open")]
    ClosedContainerInteract(i32),
    #[error("Transaction does not balance: {0}")]
    UnbalancedTransaction(String),
}
