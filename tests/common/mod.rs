#![allow(dead_code)]

use catalog_schema::{
    config::AppConfig,
    db::run_migrations,
    dto::{
        categories::CreateCategoryRequest, products::CreateProductRequest,
        styles::CreateStyleRequest, users::CreateUserRequest,
    },
    models::{Category, Product, Style, User},
    services::{category_service, product_service, style_service, user_service},
    state::AppState,
};
use rust_decimal_macros::dec;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

// Tests share one database; run them one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub struct TestDb {
    pub state: AppState,
    _guard: MutexGuard<'static, ()>,
}

/// Connect and migrate, or return `None` when no database is configured.
pub async fn setup() -> anyhow::Result<Option<TestDb>> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run database tests.");
            return Ok(None);
        }
    };

    let guard = DB_LOCK.lock().await;
    let config = AppConfig::with_database_url(database_url);
    let state = AppState::connect(&config).await?;
    run_migrations(&state.orm).await?;

    Ok(Some(TestDb {
        state,
        _guard: guard,
    }))
}

pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", &Uuid::new_v4().simple().to_string()[..12])
}

pub async fn create_user(state: &AppState) -> anyhow::Result<User> {
    let username = unique("user");
    let user = user_service::create_user(
        state,
        CreateUserRequest {
            email: Some(format!("{username}@example.com")),
            username,
        },
    )
    .await?;
    Ok(user)
}

pub async fn create_category(state: &AppState, parent: Option<Uuid>) -> anyhow::Result<Category> {
    let category = category_service::create_category(
        state,
        CreateCategoryRequest {
            name: unique("category"),
            icon: None,
            parent_category_id: parent,
            description: None,
        },
    )
    .await?;
    Ok(category)
}

pub async fn create_style(state: &AppState, label: &str) -> anyhow::Result<Style> {
    let style = style_service::create_style(
        state,
        CreateStyleRequest {
            style: label.to_string(),
        },
    )
    .await?;
    Ok(style)
}

/// Fetch the style with this label, creating it on first use.
pub async fn ensure_style(state: &AppState, label: &str) -> anyhow::Result<Style> {
    match style_service::find_style_by_label(state, label).await? {
        Some(style) => Ok(style),
        None => create_style(state, label).await,
    }
}

pub fn product_request(category_id: Uuid, style_id: Option<Uuid>) -> CreateProductRequest {
    CreateProductRequest {
        name: unique("product"),
        description: "A product for testing".into(),
        price: dec!(19.99),
        quantity: 3,
        category_id,
        subcategory_id: None,
        image: "widget.jpg".into(),
        specification: None,
        size: None,
        color: None,
        style_id,
        style_code: None,
    }
}

pub async fn create_product(
    state: &AppState,
    category_id: Uuid,
    style_id: Option<Uuid>,
) -> anyhow::Result<Product> {
    let product =
        product_service::create_product(state, product_request(category_id, style_id)).await?;
    Ok(product)
}
