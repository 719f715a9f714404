// Application layer - use cases on top of domain rules and storage.
// Both services own their state explicitly; the menu loop holds the service
// and passes it to each operation.

mod account_service;
pub mod error;
mod ledger_service;

pub use account_service::*;
pub use error::*;
pub use ledger_service::*;
