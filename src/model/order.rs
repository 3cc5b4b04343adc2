//! The customer order as delivered by the ordering backend.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be owned by the order actor that acts as the authority for
//! state changes. See [`crate::order_actor`] for the entity implementation.
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order ends up once it leaves the kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    Pickup,
    Delivery,
}

impl Display for DeliveryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryType::Pickup => write!(f, "pickup"),
            DeliveryType::Delivery => write!(f, "delivery"),
        }
    }
}

/// Lifecycle state of an order.
///
/// Any value the backend sends that is not one of the five known states is
/// absorbed by [`OrderState::Unknown`] instead of failing deserialization.
/// The board displays such orders with the confirmed profile, see
/// [`OrderState::profile`](crate::board::lifecycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    Confirmed,
    InPreparation,
    Ready,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderState {
    /// Wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Confirmed => "confirmed",
            OrderState::InPreparation => "in_preparation",
            OrderState::Ready => "ready",
            OrderState::Completed => "completed",
            OrderState::Cancelled => "cancelled",
            OrderState::Unknown => "unknown",
        }
    }

    /// Lenient parse: unrecognized input maps to [`OrderState::Unknown`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "confirmed" => OrderState::Confirmed,
            "in_preparation" => OrderState::InPreparation,
            "ready" => OrderState::Ready,
            "completed" => OrderState::Completed,
            "cancelled" => OrderState::Cancelled,
            _ => OrderState::Unknown,
        }
    }
}

impl FromStr for OrderState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Represents a customer order.
///
/// Everything except `state` is immutable once the order exists. The board
/// only reads orders; `state` changes are applied by the authority that owns
/// the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub state: OrderState,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub delivery_type: DeliveryType,
    pub branch: String,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub delivery_type: DeliveryType,
    pub branch: String,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Notes
    /// The order starts in [`OrderState::Confirmed`]; orders reach the kitchen
    /// only after payment has been confirmed upstream.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            state: OrderState::Confirmed,
            created_at: params.created_at,
            items: params.items,
            total: params.total,
            delivery_type: params.delivery_type,
            branch: params.branch,
        }
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unknown_state_deserializes_to_fallback_variant() {
        let state: OrderState = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(state, OrderState::Unknown);

        let state: OrderState = serde_json::from_str("\"in_preparation\"").unwrap();
        assert_eq!(state, OrderState::InPreparation);
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(OrderState::parse(" ready "), OrderState::Ready);
        assert_eq!(OrderState::parse("READY"), OrderState::Unknown);
        assert_eq!(
            "cancelled".parse::<OrderState>().unwrap(),
            OrderState::Cancelled
        );
    }

    #[test]
    fn test_order_from_json() {
        let json = r#"{
            "id": 7,
            "state": "ready",
            "created_at": "2024-05-01T12:00:00Z",
            "items": [{"name": "Casado", "quantity": 2}, {"name": "Fresco", "quantity": 1}],
            "total": "8500.00",
            "delivery_type": "pickup",
            "branch": "San Pedro"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, OrderId(7));
        assert_eq!(order.state, OrderState::Ready);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.delivery_type, DeliveryType::Pickup);
        assert_eq!(order.id.to_string(), "order_7");
        assert_eq!(order.total, dec!(8500.00));

        let numeric = json.replace("\"8500.00\"", "8500.5");
        let order: Order = serde_json::from_str(&numeric).unwrap();
        assert_eq!(order.total, dec!(8500.5));
    }

    #[test]
    fn test_unknown_state_serializes_as_unknown() {
        assert_eq!(
            serde_json::to_string(&OrderState::Unknown).unwrap(),
            "\"unknown\""
        );
        let back: OrderState = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(back, OrderState::Unknown);
        assert_eq!(OrderState::Unknown.to_string(), "unknown");
    }
}
