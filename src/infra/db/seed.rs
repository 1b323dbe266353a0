//! Fixture loading.
//!
//! Fixtures are embedded JSON in the same wire format the API accepts.
//! Seeding is idempotent: records whose id is already present are skipped,
//! so the routine can run on every boot or on demand via `seed`.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QuerySelect, TransactionTrait,
};
use serde::de::DeserializeOwned;

use crate::domain::{Offer, Order, User};
use crate::infra::repositories::entities::{offer, order, user};

const USERS_FIXTURE: &str = include_str!("fixtures/users.json");
const ORDERS_FIXTURE: &str = include_str!("fixtures/orders.json");
const OFFERS_FIXTURE: &str = include_str!("fixtures/offers.json");

/// Rows inserted per table by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub orders: usize,
    pub offers: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.users + self.orders + self.offers
    }
}

/// Loads a fixed record set in dependency order: users, orders, offers.
#[derive(Debug, Clone, Default)]
pub struct Seeder {
    users: Vec<User>,
    orders: Vec<Order>,
    offers: Vec<Offer>,
}

impl Seeder {
    /// Seeder over an explicit record set
    pub fn new(users: Vec<User>, orders: Vec<Order>, offers: Vec<Offer>) -> Self {
        Self {
            users,
            orders,
            offers,
        }
    }

    /// Seeder over the fixtures embedded in the binary
    pub fn from_fixtures() -> Result<Self, DbErr> {
        Ok(Self::new(
            parse_fixture(USERS_FIXTURE, "users")?,
            parse_fixture(ORDERS_FIXTURE, "orders")?,
            parse_fixture(OFFERS_FIXTURE, "offers")?,
        ))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Insert every record not yet present, in one transaction.
    pub async fn run(&self, db: &DatabaseConnection) -> Result<SeedReport, DbErr> {
        let txn = db.begin().await?;

        let users = insert_missing::<user::ActiveModel, _, _>(
            &self.users,
            |u| u.id,
            user::Column::Id,
            &txn,
        )
        .await?;
        let orders = insert_missing::<order::ActiveModel, _, _>(
            &self.orders,
            |o| o.id,
            order::Column::Id,
            &txn,
        )
        .await?;
        let offers = insert_missing::<offer::ActiveModel, _, _>(
            &self.offers,
            |o| o.id,
            offer::Column::Id,
            &txn,
        )
        .await?;

        txn.commit().await?;

        let report = SeedReport {
            users,
            orders,
            offers,
        };
        tracing::info!(
            users = report.users,
            orders = report.orders,
            offers = report.offers,
            "Seed data loaded"
        );
        Ok(report)
    }
}

fn parse_fixture<T: DeserializeOwned>(raw: &str, name: &str) -> Result<Vec<T>, DbErr> {
    serde_json::from_str(raw)
        .map_err(|e| DbErr::Custom(format!("invalid {} fixture: {}", name, e)))
}

/// Insert the records whose key is absent from the table; returns how many.
async fn insert_missing<A, R, C>(
    records: &[R],
    key: fn(&R) -> i32,
    id_column: <A::Entity as EntityTrait>::Column,
    db: &C,
) -> Result<usize, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    R: Clone + Into<A>,
    C: ConnectionTrait,
{
    let existing: HashSet<i32> = <A::Entity as EntityTrait>::find()
        .select_only()
        .column(id_column)
        .into_tuple::<i32>()
        .all(db)
        .await?
        .into_iter()
        .collect();

    let missing: Vec<A> = records
        .iter()
        .filter(|r| !existing.contains(&key(r)))
        .cloned()
        .map(Into::into)
        .collect();

    let count = missing.len();
    if count > 0 {
        <A::Entity as EntityTrait>::insert_many(missing)
            .exec(db)
            .await?;
    }

    Ok(count)
}
