pub mod ledger;
pub mod service;
pub mod subscription;

pub use ledger::*;
pub use service::*;
pub use subscription::*;
