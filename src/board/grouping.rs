//! # Presentation Grouping
//!
//! Partitions an order snapshot into the board's lanes. Lanes come in a fixed
//! order (confirmed, in preparation, ready), keep the input order of their
//! orders, and are left out entirely when empty. Orders in any other state
//! leave the board.

use super::lifecycle::StateProfile;
use super::priority::{classify_with, Priority, PriorityPolicy, WaitingTime};
use crate::model::{Order, OrderState};
use chrono::{DateTime, Utc};
use std::fmt::Display;
use tracing::debug;

/// The three lanes of the board, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    Confirmed,
    InPreparation,
    Ready,
}

impl LaneKind {
    pub const ALL: [LaneKind; 3] = [
        LaneKind::Confirmed,
        LaneKind::InPreparation,
        LaneKind::Ready,
    ];

    pub fn state(&self) -> OrderState {
        match self {
            LaneKind::Confirmed => OrderState::Confirmed,
            LaneKind::InPreparation => OrderState::InPreparation,
            LaneKind::Ready => OrderState::Ready,
        }
    }

    /// Lane for `state`, if the state is shown on the board.
    pub fn for_state(state: OrderState) -> Option<Self> {
        match state {
            OrderState::Confirmed => Some(LaneKind::Confirmed),
            OrderState::InPreparation => Some(LaneKind::InPreparation),
            OrderState::Ready => Some(LaneKind::Ready),
            OrderState::Completed | OrderState::Cancelled | OrderState::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.state().profile().label
    }
}

/// One order as shown on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCard<'a> {
    pub order: &'a Order,
    pub priority: Priority,
    pub waiting: WaitingTime,
    pub profile: StateProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lane<'a> {
    pub kind: LaneKind,
    pub cards: Vec<OrderCard<'a>>,
}

impl Lane<'_> {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Rendered board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardView<'a> {
    /// No active orders.
    Empty,
    /// At least one lane holds at least one order.
    Populated { lanes: Vec<Lane<'a>> },
}

impl<'a> BoardView<'a> {
    pub fn lanes(&self) -> &[Lane<'a>] {
        match self {
            BoardView::Empty => &[],
            BoardView::Populated { lanes } => lanes,
        }
    }

    pub fn lane(&self, kind: LaneKind) -> Option<&Lane<'a>> {
        self.lanes().iter().find(|lane| lane.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BoardView::Empty)
    }

    pub fn active_count(&self) -> usize {
        self.lanes().iter().map(Lane::len).sum()
    }

    /// Number of visible orders in `priority`.
    pub fn count_by_priority(&self, priority: Priority) -> usize {
        self.lanes()
            .iter()
            .flat_map(|lane| lane.cards.iter())
            .filter(|card| card.priority == priority)
            .count()
    }
}

/// Groups `orders` into lanes, classifying each visible order against `now`.
pub fn group<'a>(
    orders: &'a [Order],
    now: DateTime<Utc>,
    policy: &PriorityPolicy,
) -> BoardView<'a> {
    let lanes: Vec<Lane<'a>> = LaneKind::ALL
        .iter()
        .filter_map(|&kind| {
            let cards: Vec<OrderCard<'a>> = orders
                .iter()
                .filter(|order| LaneKind::for_state(order.state) == Some(kind))
                .map(|order| {
                    let classification = classify_with(policy, now, order.created_at);
                    OrderCard {
                        order,
                        priority: classification.priority,
                        waiting: classification.waiting,
                        profile: order.state.profile(),
                    }
                })
                .collect();
            (!cards.is_empty()).then_some(Lane { kind, cards })
        })
        .collect();

    let hidden = orders.len() - lanes.iter().map(Lane::len).sum::<usize>();
    debug!(total = orders.len(), hidden, lanes = lanes.len(), "Grouped orders");

    if lanes.is_empty() {
        BoardView::Empty
    } else {
        BoardView::Populated { lanes }
    }
}

/// Holds the latest order snapshot supplied by the host.
///
/// `last_updated` moves only when a new snapshot arrives; priorities and
/// waiting times are recomputed on each [`render`](OrderBoard::render).
#[derive(Debug, Clone)]
pub struct OrderBoard {
    orders: Vec<Order>,
    last_updated: DateTime<Utc>,
    policy: PriorityPolicy,
}

impl OrderBoard {
    pub fn new(policy: PriorityPolicy, now: DateTime<Utc>) -> Self {
        Self {
            orders: Vec::new(),
            last_updated: now,
            policy,
        }
    }

    /// Replaces the snapshot wholesale and stamps `last_updated`.
    pub fn replace_orders(&mut self, orders: Vec<Order>, now: DateTime<Utc>) {
        debug!(count = orders.len(), "Order snapshot replaced");
        self.orders = orders;
        self.last_updated = now;
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn policy(&self) -> &PriorityPolicy {
        &self.policy
    }

    pub fn render(&self, now: DateTime<Utc>) -> BoardView<'_> {
        group(&self.orders, now, &self.policy)
    }
}

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lanes = match self {
            BoardView::Empty => return writeln!(f, "No active orders"),
            BoardView::Populated { lanes } => lanes,
        };
        for lane in lanes {
            writeln!(f, "== {} ({})", lane.kind.label(), lane.len())?;
            for card in &lane.cards {
                let order = card.order;
                write!(
                    f,
                    "  {} [{}] {} | {} | {} items | {} | {}",
                    order.id,
                    card.priority,
                    card.waiting,
                    order.branch,
                    order.item_count(),
                    order.delivery_type,
                    order.total,
                )?;
                if let Some(advance) = card.profile.advance {
                    write!(f, " | next: {}", advance.label())?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::lifecycle::AdvanceAction;
    use crate::board::test_support::{now, order_in};
    use crate::model::OrderId;

    fn view(orders: &[Order]) -> BoardView<'_> {
        group(orders, now(), &PriorityPolicy::default())
    }

    #[test]
    fn test_empty_snapshot_is_placeholder() {
        let board = view(&[]);
        assert!(board.is_empty());
        assert!(board.lanes().is_empty());
        assert_eq!(board.to_string(), "No active orders\n");
    }

    #[test]
    fn test_only_terminal_orders_is_placeholder() {
        let orders = vec![
            order_in(1, OrderState::Completed, 3),
            order_in(2, OrderState::Cancelled, 3),
        ];
        assert_eq!(view(&orders), BoardView::Empty);
    }

    #[test]
    fn test_stale_confirmed_order() {
        let orders = vec![order_in(1, OrderState::Confirmed, 35)];
        let board = view(&orders);

        assert_eq!(board.lanes().len(), 1);
        let lane = board.lane(LaneKind::Confirmed).unwrap();
        let card = &lane.cards[0];
        assert_eq!(card.order.id, OrderId(1));
        assert_eq!(card.priority, Priority::High);
        assert_eq!(card.waiting.label(), "35 minutes");
        let advance = card.profile.advance.unwrap();
        assert_eq!(advance, AdvanceAction::StartPreparation);
        assert_eq!(advance.label(), "start preparation");
        assert_eq!(advance.target(), OrderState::InPreparation);
    }

    #[test]
    fn test_fresh_ready_order() {
        let orders = vec![order_in(4, OrderState::Ready, 5)];
        let board = view(&orders);

        assert_eq!(board.lanes().len(), 1);
        assert!(board.lane(LaneKind::Confirmed).is_none());
        let card = &board.lane(LaneKind::Ready).unwrap().cards[0];
        assert_eq!(card.priority, Priority::Normal);
        assert_eq!(card.profile.advance.unwrap().label(), "complete");
        assert_eq!(card.profile.advance.unwrap().target(), OrderState::Completed);
    }

    #[test]
    fn test_lanes_are_fixed_order_and_stable() {
        let orders = vec![
            order_in(1, OrderState::Ready, 2),
            order_in(2, OrderState::Confirmed, 40),
            order_in(3, OrderState::Ready, 50),
            order_in(4, OrderState::InPreparation, 1),
            order_in(5, OrderState::Confirmed, 1),
            order_in(6, OrderState::Completed, 1),
        ];
        let board = view(&orders);

        let kinds: Vec<LaneKind> = board.lanes().iter().map(|lane| lane.kind).collect();
        assert_eq!(kinds, LaneKind::ALL.to_vec());

        let ids = |kind: LaneKind| -> Vec<u32> {
            board.lane(kind).unwrap().cards.iter().map(|c| c.order.id.0).collect()
        };
        // Not re-sorted by age: order 3 is older than order 1 but stays behind it.
        assert_eq!(ids(LaneKind::Ready), vec![1, 3]);
        assert_eq!(ids(LaneKind::Confirmed), vec![2, 5]);
        assert_eq!(ids(LaneKind::InPreparation), vec![4]);
        assert_eq!(board.active_count(), 5);
        assert_eq!(board.count_by_priority(Priority::High), 2);
    }

    #[test]
    fn test_each_live_order_in_exactly_one_matching_lane() {
        let states = [
            OrderState::Confirmed,
            OrderState::InPreparation,
            OrderState::Ready,
        ];
        let orders: Vec<Order> = (0..30)
            .map(|i| order_in(i, states[i as usize % 3], i64::from(i)))
            .collect();
        let board = view(&orders);

        for order in &orders {
            let hits: Vec<&Lane> = board
                .lanes()
                .iter()
                .filter(|lane| lane.cards.iter().any(|c| c.order.id == order.id))
                .collect();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].kind.state(), order.state);
        }
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let orders = vec![
            order_in(1, OrderState::InPreparation, 20),
            order_in(2, OrderState::Confirmed, 0),
        ];
        assert_eq!(view(&orders), view(&orders));
    }

    #[test]
    fn test_unknown_state_has_no_lane_but_confirmed_profile() {
        // Grouping and lifecycle lookup disagree on purpose: the order is hidden
        // from the board, yet its actions resolve to the confirmed profile.
        let orders = vec![order_in(8, OrderState::Unknown, 10)];
        assert_eq!(view(&orders), BoardView::Empty);
        assert_eq!(orders[0].state.profile(), OrderState::Confirmed.profile());
    }

    #[test]
    fn test_order_board_stamps_on_replace_only() {
        let start = now();
        let mut board = OrderBoard::new(PriorityPolicy::default(), start);
        assert!(board.render(start).is_empty());

        let later = start + chrono::Duration::minutes(2);
        board.replace_orders(vec![order_in(1, OrderState::Confirmed, 14)], later);
        assert_eq!(board.last_updated(), later);

        // Rendering later reclassifies without moving the stamp.
        let much_later = later + chrono::Duration::minutes(1);
        let view = board.render(much_later);
        assert_eq!(view.lanes()[0].cards[0].priority, Priority::Medium);
        assert_eq!(board.last_updated(), later);
    }
}
