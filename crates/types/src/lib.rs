// crates/types/src/lib.rs
pub mod account;
pub mod cash_flow;
pub mod category;
pub mod classifier;
pub mod credit_card;
pub mod import;
pub mod pagination;
pub mod transaction;

pub use account::*;
pub use cash_flow::*;
pub use category::*;
pub use classifier::*;
pub use credit_card::*;
pub use import::*;
pub use pagination::*;
pub use transaction::*;
