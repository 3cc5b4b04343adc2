use chrono::{Duration, Utc};
use order_board::board::{LaneKind, Priority, Transition};
use order_board::config::BoardConfig;
use order_board::model::{DeliveryType, OrderCreate, OrderId, OrderItem, OrderState};
use order_board::order_actor::OrderError;
use order_board::runtime::KitchenSystem;
use rust_decimal_macros::dec;

fn order_aged(minutes: i64) -> OrderCreate {
    OrderCreate {
        created_at: Utc::now() - Duration::minutes(minutes),
        items: vec![OrderItem::new("Casado", 1), OrderItem::new("Fresco", 1)],
        total: dec!(5750.00),
        delivery_type: DeliveryType::Pickup,
        branch: "Centro".to_string(),
    }
}

/// Refreshes until `id` reaches `state` or the attempts run out.
async fn wait_for_state(system: &mut KitchenSystem, id: &OrderId, state: OrderState) -> bool {
    for _ in 0..50 {
        system.refresh().await.expect("refresh failed");
        if system
            .board()
            .orders()
            .iter()
            .any(|order| &order.id == id && order.state == state)
        {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    false
}

/// Full end-to-end test: real actor, real board, commands issued through the sink.
#[tokio::test]
async fn test_order_moves_across_lanes_and_leaves_board() {
    let mut system = KitchenSystem::new(&BoardConfig::default());

    let old = system.order_client.create_order(order_aged(35)).await.unwrap();
    let fresh = system.order_client.create_order(order_aged(2)).await.unwrap();

    system.refresh().await.unwrap();
    {
        let view = system.render(Utc::now());
        let lane = view.lane(LaneKind::Confirmed).expect("confirmed lane");
        let ids: Vec<&OrderId> = lane.cards.iter().map(|card| &card.order.id).collect();
        assert_eq!(ids, vec![&old, &fresh]);
        assert_eq!(lane.cards[0].priority, Priority::High);
        assert_eq!(lane.cards[1].priority, Priority::Normal);
        assert_eq!(view.lanes().len(), 1);
    }

    assert!(system.request(&old, Transition::Advance));
    assert!(wait_for_state(&mut system, &old, OrderState::InPreparation).await);
    {
        let view = system.render(Utc::now());
        let prep = view.lane(LaneKind::InPreparation).expect("preparation lane");
        assert_eq!(prep.cards[0].order.id, old);
        assert_eq!(view.lane(LaneKind::Confirmed).unwrap().len(), 1);
    }

    assert!(system.request(&old, Transition::Advance));
    assert!(wait_for_state(&mut system, &old, OrderState::Ready).await);
    assert!(system.request(&old, Transition::Advance));
    assert!(wait_for_state(&mut system, &old, OrderState::Completed).await);

    // Completed orders offer nothing and are gone from the board.
    assert!(!system.request(&old, Transition::Cancel));
    {
        let view = system.render(Utc::now());
        assert_eq!(view.active_count(), 1);
        assert!(view.lane(LaneKind::Ready).is_none());
    }

    assert!(system.request(&fresh, Transition::Cancel));
    assert!(wait_for_state(&mut system, &fresh, OrderState::Cancelled).await);
    assert!(system.render(Utc::now()).is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_kitchen_renders_placeholder() {
    let mut system = KitchenSystem::new(&BoardConfig::default());
    system.refresh().await.unwrap();

    let view = system.render(Utc::now());
    assert!(view.is_empty());
    assert_eq!(view.to_string(), "No active orders\n");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_request_for_unknown_order_is_not_issued() {
    let mut system = KitchenSystem::new(&BoardConfig::default());
    system.refresh().await.unwrap();

    assert!(!system.request(&OrderId(99), Transition::Advance));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stale_board_command_is_rejected_by_authority() {
    let mut system = KitchenSystem::new(&BoardConfig::default());
    let id = system.order_client.create_order(order_aged(1)).await.unwrap();
    system.refresh().await.unwrap();

    // Someone else completes the order's first step while this board still
    // shows it as confirmed.
    system
        .order_client
        .change_state(id.clone(), OrderState::InPreparation)
        .await
        .unwrap();

    // The board still offers confirmed -> in_preparation and emits it.
    assert!(system.request(&id, Transition::Advance));

    // The actor refuses the repeated move.
    let err = system
        .order_client
        .change_state(id.clone(), OrderState::InPreparation)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::IllegalTransition {
            from: OrderState::InPreparation,
            to: OrderState::InPreparation,
        }
    );

    // Neither rejected command moved the order.
    assert!(wait_for_state(&mut system, &id, OrderState::InPreparation).await);
    let view = system.render(Utc::now());
    let prep = view.lane(LaneKind::InPreparation).expect("preparation lane");
    assert_eq!(prep.len(), 1);
    assert!(view.lane(LaneKind::Confirmed).is_none());

    system.shutdown().await.unwrap();
}
