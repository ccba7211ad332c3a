use serde::Serialize;

/// Purchase state of a one-time product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseState {
    Purchased,
    Canceled,
    Pending,
    Unrecognized(i64),
}

impl PurchaseState {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => PurchaseState::Purchased,
            1 => PurchaseState::Canceled,
            2 => PurchaseState::Pending,
            other => PurchaseState::Unrecognized(other),
        }
    }
}

/// Payment state of the current subscription billing cycle.
///
/// Every code outside 0..=2 is reported as a pending deferred
/// upgrade/downgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    PaymentPending,
    PaymentReceived,
    FreeTrial,
    PendingDeferredUpgradeDowngrade,
}

impl PaymentState {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => PaymentState::PaymentPending,
            1 => PaymentState::PaymentReceived,
            2 => PaymentState::FreeTrial,
            _ => PaymentState::PendingDeferredUpgradeDowngrade,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentState::PaymentPending => "PAYMENT_PENDING",
            PaymentState::PaymentReceived => "PAYMENT_RECEIVED",
            PaymentState::FreeTrial => "FREE_TRIAL",
            PaymentState::PendingDeferredUpgradeDowngrade => "PENDING_DEFERRED_UPGRADE_DOWNGRADE",
        }
    }
}

impl std::fmt::Display for PaymentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchase type flag. Production purchases leave it unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseType {
    Test,
    Promo,
    Rewarded,
    Unrecognized(i64),
}

impl PurchaseType {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => PurchaseType::Test,
            1 => PurchaseType::Promo,
            2 => PurchaseType::Rewarded,
            other => PurchaseType::Unrecognized(other),
        }
    }

    /// Only test purchases carry a label.
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseType::Test => "TEST",
            _ => "",
        }
    }
}

/// Snapshot of every receipt query, ready to hand back to an API caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReceiptSummary {
    pub valid_receipt: bool,
    pub valid_product: bool,
    pub valid_subscription: bool,
    pub active: bool,
    pub expired: bool,
    pub trial: bool,
    pub payment_state: Option<String>,
    pub purchase_type: Option<String>,
}
