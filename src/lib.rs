pub mod error;
pub mod model;
pub mod receipt;
pub mod types;

pub use error::{ReceiptError, ReceiptResult};
pub use model::{ProductPurchase, SubscriptionPurchase};
pub use receipt::Receipt;
pub use types::{PaymentState, PurchaseState, PurchaseType, ReceiptSummary};
