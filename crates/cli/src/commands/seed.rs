//! Database seeding command.
//!
//! Populates the admin database with a small set of sample categories,
//! users, shops, and orders for local development. Intentionally not
//! idempotent; run it against a freshly migrated database.

use orderdash_core::{Email, Money, ShopStatus, UserType};

use orderdash_admin::db::categories::CategoryFields;
use orderdash_admin::db::shop_accounts::ShopAccountFields;
use orderdash_admin::db::{
    CategoryRepository, OrderRepository, ShopAccountRepository, UserRepository,
};
use orderdash_admin::services::auth;

use super::{CommandError, connect};

const SEED_PASSWORD: &str = "orderdash-dev";

/// Seed the database with sample data.
///
/// # Errors
///
/// Returns `CommandError` if any insert fails, including unique-email
/// conflicts when run against an already seeded database.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;
    let password_hash = auth::hash_password(SEED_PASSWORD)?;

    tracing::info!("Seeding categories...");
    let categories = CategoryRepository::new(&pool);
    let souvlaki = categories
        .create(&CategoryFields {
            name: "Souvlaki",
            description: Some("Grilled meat and pita"),
            icon: Some("skewer"),
            color: Some("#e25822"),
            is_active: true,
        })
        .await?;
    let pizza = categories
        .create(&CategoryFields {
            name: "Pizza",
            description: None,
            icon: Some("pizza"),
            color: Some("#2a9d8f"),
            is_active: true,
        })
        .await?;

    tracing::info!("Seeding users...");
    let users = UserRepository::new(&pool);
    let driver = users
        .create(
            &Email::parse("driver@orderdash.dev").expect("valid seed email"),
            &password_hash,
            UserType::Driver,
        )
        .await?;
    users
        .create(
            &Email::parse("member@orderdash.dev").expect("valid seed email"),
            &password_hash,
            UserType::Shop,
        )
        .await?;

    tracing::info!("Seeding shop accounts...");
    let shops = ShopAccountRepository::new(&pool);
    let grill = shops
        .create(
            &ShopAccountFields {
                shop_name: "Akropolis Grill",
                email: &Email::parse("grill@orderdash.dev").expect("valid seed email"),
                contact_person: "Maria Papadopoulou",
                phone: "+302101234567",
                address: "Ermou 12, Athens",
                afm: "123456789",
                category_id: Some(souvlaki.id),
                status: ShopStatus::Active,
            },
            &password_hash,
        )
        .await?;
    shops
        .create(
            &ShopAccountFields {
                shop_name: "Napoli Corner",
                email: &Email::parse("napoli@orderdash.dev").expect("valid seed email"),
                contact_person: "Giorgos Nikolaou",
                phone: "+302109876543",
                address: "Patission 44, Athens",
                afm: "987654321",
                category_id: Some(pizza.id),
                status: ShopStatus::Pending,
            },
            &password_hash,
        )
        .await?;

    tracing::info!("Seeding orders...");
    let orders = OrderRepository::new(&pool);
    for (price_cents, earnings_cents) in [(1450_i64, 220_i64), (2890, 410), (990, 180)] {
        orders
            .create(
                driver.id,
                grill.id,
                Money::from_cents(price_cents),
                Money::from_cents(earnings_cents),
            )
            .await?;
    }

    tracing::info!("Seed complete! Sample accounts use password '{SEED_PASSWORD}'.");
    Ok(())
}
