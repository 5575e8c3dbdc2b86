pub mod chest;

pub use chest::ChestBlock;
