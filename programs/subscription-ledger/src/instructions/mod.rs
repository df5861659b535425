pub mod create_service;
pub mod gift_subscription;
pub mod initialize;
pub mod is_subscribed;
pub mod manage_service;
pub mod subscribe;
pub mod withdraw;

pub use create_service::*;
pub use gift_subscription::*;
pub use initialize::*;
pub use is_subscribed::*;
pub use manage_service::*;
pub use subscribe::*;
pub use withdraw::*;
