use chrono::Utc;

use crate::error::{ReceiptError, ReceiptResult};
use crate::model::{ProductPurchase, SubscriptionPurchase};
use crate::types::{PaymentState, PurchaseType, ReceiptSummary};

/// Verification response for a single purchase token.
///
/// The product and subscription endpoints each return their own record, so a
/// receipt holds at most one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Receipt {
    Product(ProductPurchase),
    Subscription(SubscriptionPurchase),
    #[default]
    Empty,
}

impl Receipt {
    /// Build a receipt from the two optional verification records.
    pub fn from_parts(
        product: Option<ProductPurchase>,
        subscription: Option<SubscriptionPurchase>,
    ) -> ReceiptResult<Self> {
        match (product, subscription) {
            (Some(_), Some(_)) => Err(ReceiptError::ConflictingPurchases),
            (Some(product), None) => Ok(Receipt::Product(product)),
            (None, Some(subscription)) => Ok(Receipt::Subscription(subscription)),
            (None, None) => Ok(Receipt::Empty),
        }
    }

    pub fn product(&self) -> Option<&ProductPurchase> {
        match self {
            Receipt::Product(product) => Some(product),
            _ => None,
        }
    }

    pub fn subscription(&self) -> Option<&SubscriptionPurchase> {
        match self {
            Receipt::Subscription(subscription) => Some(subscription),
            _ => None,
        }
    }

    /// True for a subscription, or for a product in the purchased state.
    pub fn is_valid_receipt(&self) -> bool {
        self.is_valid_subscription() || self.is_valid_product()
    }

    pub fn is_valid_product(&self) -> bool {
        self.product().is_some_and(|product| product.purchase_state == 0)
    }

    /// Presence of a subscription record is enough; its state codes are not
    /// consulted.
    pub fn is_valid_subscription(&self) -> bool {
        self.subscription().is_some()
    }

    /// Whether the subscription will renew at the end of the current period.
    pub fn is_active(&self) -> bool {
        self.subscription().is_some_and(|subscription| subscription.auto_renewing)
    }

    /// Compares the expiry against the wall clock, so repeated calls may
    /// disagree.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        self.subscription()
            .is_some_and(|subscription| subscription.expiry_time_millis < now_millis)
    }

    /// True for every subscription regardless of its payment state; false
    /// when there is no subscription.
    ///
    /// Use [`Receipt::payment_state`] to test for an actual free trial.
    pub fn is_trial(&self) -> bool {
        self.is_valid_subscription()
    }

    pub fn payment_state(&self) -> ReceiptResult<PaymentState> {
        self.require_subscription().map(SubscriptionPurchase::payment)
    }

    pub fn get_payment_state(&self) -> ReceiptResult<&'static str> {
        self.payment_state().map(|state| state.as_str())
    }

    pub fn purchase_type(&self) -> ReceiptResult<PurchaseType> {
        self.require_subscription()?
            .purchase_kind()
            .ok_or_else(|| {
                tracing::debug!("purchase type requested but not set on subscription");
                ReceiptError::PurchaseTypeMissing
            })
    }

    /// "TEST" for test purchases, empty otherwise.
    pub fn get_purchase_type(&self) -> ReceiptResult<&'static str> {
        self.purchase_type().map(|kind| kind.label())
    }

    pub fn summary(&self) -> ReceiptSummary {
        ReceiptSummary {
            valid_receipt: self.is_valid_receipt(),
            valid_product: self.is_valid_product(),
            valid_subscription: self.is_valid_subscription(),
            active: self.is_active(),
            expired: self.is_expired(),
            trial: self.is_trial(),
            payment_state: self.get_payment_state().ok().map(str::to_string),
            purchase_type: self.get_purchase_type().ok().map(str::to_string),
        }
    }

    fn require_subscription(&self) -> ReceiptResult<&SubscriptionPurchase> {
        self.subscription().ok_or_else(|| {
            tracing::debug!("subscription field requested on a receipt without a subscription");
            ReceiptError::SubscriptionMissing
        })
    }
}

impl From<ProductPurchase> for Receipt {
    fn from(product: ProductPurchase) -> Self {
        Receipt::Product(product)
    }
}

impl From<SubscriptionPurchase> for Receipt {
    fn from(subscription: SubscriptionPurchase) -> Self {
        Receipt::Subscription(subscription)
    }
}
