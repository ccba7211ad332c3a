use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{PaymentState, PurchaseState, PurchaseType};

/// A one-time product purchase as returned by
/// `purchases.products.get` of the Android Publisher API.
///
/// Absent fields take the upstream zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPurchase {
    pub kind: Option<String>,
    #[serde(default, with = "int64")]
    pub purchase_time_millis: i64,
    /// 0 purchased, 1 canceled, 2 pending.
    #[serde(default)]
    pub purchase_state: i64,
    #[serde(default)]
    pub consumption_state: i64,
    pub developer_payload: Option<String>,
    pub order_id: Option<String>,
    /// Only set when the purchase did not go through the standard billing flow.
    pub purchase_type: Option<i64>,
    #[serde(default)]
    pub acknowledgement_state: i64,
    pub purchase_token: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
    pub obfuscated_external_account_id: Option<String>,
    pub obfuscated_external_profile_id: Option<String>,
    pub region_code: Option<String>,
}

impl ProductPurchase {
    pub fn state(&self) -> PurchaseState {
        PurchaseState::from_code(self.purchase_state)
    }

    pub fn purchase_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.purchase_time_millis)
    }
}

/// A recurring subscription purchase as returned by
/// `purchases.subscriptions.get` of the Android Publisher API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPurchase {
    pub kind: Option<String>,
    #[serde(default, with = "int64")]
    pub start_time_millis: i64,
    #[serde(default, with = "int64")]
    pub expiry_time_millis: i64,
    #[serde(default, with = "int64::option")]
    pub auto_resume_time_millis: Option<i64>,
    #[serde(default)]
    pub auto_renewing: bool,
    pub price_currency_code: Option<String>,
    #[serde(default, with = "int64")]
    pub price_amount_micros: i64,
    pub country_code: Option<String>,
    pub developer_payload: Option<String>,
    /// 0 pending, 1 received, 2 free trial, 3 pending deferred upgrade/downgrade.
    #[serde(default)]
    pub payment_state: i64,
    pub cancel_reason: Option<i64>,
    #[serde(default, with = "int64::option")]
    pub user_cancellation_time_millis: Option<i64>,
    pub order_id: Option<String>,
    pub linked_purchase_token: Option<String>,
    /// Unset for production purchases, 0 for test purchases.
    pub purchase_type: Option<i64>,
    #[serde(default)]
    pub acknowledgement_state: i64,
    pub obfuscated_external_account_id: Option<String>,
    pub obfuscated_external_profile_id: Option<String>,
}

impl SubscriptionPurchase {
    pub fn payment(&self) -> PaymentState {
        PaymentState::from_code(self.payment_state)
    }

    pub fn purchase_kind(&self) -> Option<PurchaseType> {
        self.purchase_type.map(PurchaseType::from_code)
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.start_time_millis)
    }

    pub fn expiry_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expiry_time_millis)
    }
}

/// The publisher API encodes int64 values as JSON strings; numbers are
/// accepted too.
mod int64 {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    impl Raw {
        fn parse<E: de::Error>(self) -> Result<i64, E> {
            match self {
                Raw::Int(value) => Ok(value),
                Raw::Str(text) => text.trim().parse().map_err(E::custom),
            }
        }
    }

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    /// `null` reads as zero.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        Ok(Option::<Raw>::deserialize(deserializer)?
            .map(Raw::parse::<D::Error>)
            .transpose()?
            .unwrap_or_default())
    }

    pub mod option {
        use super::Raw;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<i64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => serializer.collect_str(value),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<i64>, D::Error> {
            Option::<Raw>::deserialize(deserializer)?
                .map(Raw::parse)
                .transpose()
        }
    }
}
