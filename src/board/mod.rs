//! # Order Board
//!
//! The live order-status board shown to kitchen staff. It is a pure view over
//! an order snapshot supplied by the host:
//!
//! - [`lifecycle`] - what each order state offers and how transitions are requested
//! - [`priority`] - urgency tier and waiting-time label from an order's age
//! - [`grouping`] - lanes, the empty placeholder and the [`OrderBoard`] snapshot holder
//!
//! Nothing here performs I/O or returns errors. Transitions leave the board as
//! [`StateChangeRequest`]s handed to a [`StateChangeSink`]; the result is only
//! seen when the host supplies the next snapshot.
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use order_board::board::{lifecycle, OrderBoard, PriorityPolicy, Transition};
//! use order_board::model::{DeliveryType, Order, OrderCreate, OrderId, OrderItem, OrderState};
//! use rust_decimal::Decimal;
//!
//! let now = Utc::now();
//! let order = Order::new(
//!     OrderId(1),
//!     OrderCreate {
//!         created_at: now - Duration::minutes(35),
//!         items: vec![OrderItem::new("Gallo pinto", 1)],
//!         total: Decimal::new(3500, 0),
//!         delivery_type: DeliveryType::Pickup,
//!         branch: "Centro".into(),
//!     },
//! );
//!
//! let mut board = OrderBoard::new(PriorityPolicy::default(), now);
//! board.replace_orders(vec![order], now);
//!
//! let view = board.render(now);
//! let card = &view.lanes()[0].cards[0];
//! assert_eq!(card.waiting.label(), "35 minutes");
//!
//! let sink = |id: &OrderId, next: OrderState| println!("{id} -> {next}");
//! assert!(lifecycle::emit(&sink, card.order, Transition::Advance));
//! ```

pub mod grouping;
pub mod lifecycle;
pub mod priority;

pub use grouping::{group, BoardView, Lane, LaneKind, OrderBoard, OrderCard};
pub use lifecycle::{AdvanceAction, StateChangeRequest, StateChangeSink, StateProfile, Transition};
pub use priority::{classify, classify_with, Classification, Priority, PriorityPolicy, WaitingTime};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{DeliveryType, Order, OrderCreate, OrderId, OrderItem, OrderState};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    /// Order in `state`, created `age_minutes` before [`now`].
    pub fn order_in(id: u32, state: OrderState, age_minutes: i64) -> Order {
        let mut order = Order::new(
            OrderId(id),
            OrderCreate {
                created_at: now() - Duration::minutes(age_minutes),
                items: vec![OrderItem::new("Casado", 1)],
                total: Decimal::new(4500, 0),
                delivery_type: DeliveryType::Pickup,
                branch: "Centro".to_string(),
            },
        );
        order.state = state;
        order
    }
}
