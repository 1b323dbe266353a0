//! Repository and seeding tests against in-memory SQLite.

mod common;

use chrono::NaiveDate;

use taskboard_api::domain::{Offer, Order, User};
use taskboard_api::errors::AppError;
use taskboard_api::infra::{
    OfferRepository, OfferStore, OrderRepository, OrderStore, Seeder, UserRepository, UserStore,
};

fn create_test_user(id: i32) -> User {
    User {
        id,
        first_name: "Ann".to_string(),
        last_name: "Petrova".to_string(),
        age: 34,
        email: "ann@example.com".to_string(),
        role: "customer".to_string(),
        phone: "+79001112233".to_string(),
    }
}

fn create_test_order(id: i32, customer_id: i32) -> Order {
    Order {
        id,
        name: "Move a sofa".to_string(),
        description: "Fifth floor, no elevator".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
        address: "12 Lenina St".to_string(),
        price: 3500,
        customer_id,
        executor_id: 2,
    }
}

#[tokio::test]
async fn test_insert_then_get_returns_same_fields() {
    let db = common::memory_db().await;
    let repo = UserStore::new(db.get_connection());

    repo.insert(create_test_user(7)).await.unwrap();

    let found = repo.get(7).await.unwrap();
    assert_eq!(found, Some(create_test_user(7)));
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let db = common::memory_db().await;
    let repo = UserStore::new(db.get_connection());

    assert_eq!(repo.get(404).await.unwrap(), None);
}

#[tokio::test]
async fn test_insert_duplicate_key_is_conflict() {
    let db = common::memory_db().await;
    let repo = UserStore::new(db.get_connection());

    repo.insert(create_test_user(1)).await.unwrap();
    let result = repo.insert(create_test_user(1)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_update_preserves_id_and_changes_fields() {
    let db = common::memory_db().await;
    let repo = UserStore::new(db.get_connection());
    repo.insert(create_test_user(3)).await.unwrap();

    let mut changed = create_test_user(3);
    changed.age = 35;
    changed.phone = "+79990000000".to_string();
    repo.update(3, changed.clone()).await.unwrap();

    assert_eq!(repo.get(3).await.unwrap(), Some(changed));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let db = common::memory_db().await;
    let repo = UserStore::new(db.get_connection());

    let result = repo.update(9, create_test_user(9)).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_can_rekey_record() {
    let db = common::memory_db().await;
    let repo = OrderStore::new(db.get_connection());
    repo.insert(create_test_order(10, 1)).await.unwrap();

    repo.update(10, create_test_order(20, 1)).await.unwrap();

    assert_eq!(repo.get(10).await.unwrap(), None);
    assert_eq!(repo.get(20).await.unwrap(), Some(create_test_order(20, 1)));
}

#[tokio::test]
async fn test_rekey_onto_existing_id_is_conflict() {
    let db = common::memory_db().await;
    let repo = OfferStore::new(db.get_connection());
    let first = Offer {
        id: 1,
        order_id: 10,
        executor_id: 2,
    };
    let second = Offer {
        id: 2,
        order_id: 11,
        executor_id: 3,
    };
    repo.insert(first.clone()).await.unwrap();
    repo.insert(second).await.unwrap();

    let result = repo
        .update(
            2,
            Offer {
                id: 1,
                order_id: 11,
                executor_id: 3,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.get(1).await.unwrap(), Some(first));
}

#[tokio::test]
async fn test_delete_then_get_is_none() {
    let db = common::memory_db().await;
    let repo = OrderStore::new(db.get_connection());
    repo.insert(create_test_order(10, 1)).await.unwrap();

    repo.delete(10).await.unwrap();

    assert_eq!(repo.get(10).await.unwrap(), None);
    assert!(matches!(repo.delete(10).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_order_dates_round_trip() {
    let db = common::memory_db().await;
    let repo = OrderStore::new(db.get_connection());
    repo.insert(create_test_order(10, 1)).await.unwrap();

    let order = repo.get(10).await.unwrap().unwrap();

    assert_eq!(order.start_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(order.end_date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
}

#[tokio::test]
async fn test_deleting_user_leaves_orders_in_place() {
    let db = common::memory_db().await;
    let users = UserStore::new(db.get_connection());
    let orders = OrderStore::new(db.get_connection());
    users.insert(create_test_user(1)).await.unwrap();
    orders.insert(create_test_order(10, 1)).await.unwrap();

    users.delete(1).await.unwrap();

    let order = orders.get(10).await.unwrap().unwrap();
    assert_eq!(order.customer_id, 1);
}

#[tokio::test]
async fn test_seeded_users_match_fixtures() {
    let db = common::memory_db().await;
    let report = db.seed().await.unwrap();
    let fixtures = Seeder::from_fixtures().unwrap();

    let mut listed = UserStore::new(db.get_connection()).list().await.unwrap();
    listed.sort_by_key(|u| u.id);
    let mut expected = fixtures.users().to_vec();
    expected.sort_by_key(|u| u.id);

    assert_eq!(report.users, expected.len());
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_seeding_twice_inserts_nothing_new() {
    let db = common::memory_db().await;

    let first = db.seed().await.unwrap();
    let second = db.seed().await.unwrap();

    assert!(first.total() > 0);
    assert_eq!(second.total(), 0);
    let orders = OrderStore::new(db.get_connection()).list().await.unwrap();
    assert_eq!(orders.len(), first.orders);
}

#[tokio::test]
async fn test_seeding_fills_only_missing_records() {
    let db = common::memory_db().await;
    let users = UserStore::new(db.get_connection());
    users.insert(create_test_user(1)).await.unwrap();

    let seeder = Seeder::new(
        vec![create_test_user(1), create_test_user(2)],
        vec![create_test_order(10, 1)],
        vec![],
    );
    let report = seeder.run(db.connection()).await.unwrap();

    assert_eq!(report.users, 1);
    assert_eq!(report.orders, 1);
    assert_eq!(report.offers, 0);
    assert_eq!(users.list().await.unwrap().len(), 2);
}
