/// Errors raised while reading a Play Store receipt
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("Receipt does not hold a subscription purchase")]
    SubscriptionMissing,

    #[error("Subscription purchase type is not set")]
    PurchaseTypeMissing,

    #[error("Receipt cannot hold both a product and a subscription purchase")]
    ConflictingPurchases,
}

/// Result type for receipt operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;
