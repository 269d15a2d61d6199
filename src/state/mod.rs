pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{SubscriptionId, ThemeStore};
