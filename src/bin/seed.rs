use catalog_schema::{
    config::AppConfig,
    db::run_migrations,
    dto::{
        categories::{CreateCategoryRequest, CreateSubCategoryRequest},
        products::{CreateAttributeRequest, CreateProductRequest},
        styles::CreateStyleRequest,
        users::CreateUserRequest,
    },
    models::{Style, User},
    services::{
        attribute_service, category_service, product_service, style_service,
        subcategory_service, user_service,
    },
    state::AppState,
    telemetry::init_tracing,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let state = AppState::connect(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&state.orm).await?;

    let user = ensure_user(&state, "demo").await?;
    let vintage = ensure_style(&state, "Vintage").await?;
    ensure_style(&state, "Modern").await?;

    if !product_service::list_products(&state, Default::default())
        .await?
        .items
        .is_empty()
    {
        tracing::info!("catalog already seeded, skipping products");
        return Ok(());
    }

    let apparel = category_service::create_category(
        &state,
        CreateCategoryRequest {
            name: "Apparel".into(),
            icon: Some("apparel.png".into()),
            parent_category_id: None,
            description: Some("Clothing and accessories".into()),
        },
    )
    .await?;
    let outerwear = category_service::create_category(
        &state,
        CreateCategoryRequest {
            name: "Outerwear".into(),
            icon: None,
            parent_category_id: Some(apparel.id),
            description: None,
        },
    )
    .await?;
    let jackets = subcategory_service::create_subcategory(
        &state,
        CreateSubCategoryRequest {
            name: "Jackets".into(),
            parent_category_id: outerwear.id,
        },
    )
    .await?;

    let products = [
        ("Denim Jacket", "Washed denim, button front", Decimal::new(8999, 2), 25, Some(vintage.id)),
        ("Rain Shell", "Lightweight waterproof shell", Decimal::new(12950, 2), 40, None),
    ];

    for (name, description, price, quantity, style_id) in products {
        let product = product_service::create_product(
            &state,
            CreateProductRequest {
                name: name.into(),
                description: description.into(),
                price,
                quantity,
                category_id: outerwear.id,
                subcategory_id: Some(jackets.id),
                image: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
                specification: None,
                size: Some("M".into()),
                color: None,
                style_id,
                style_code: None,
            },
        )
        .await?;

        attribute_service::create_attribute(
            &state,
            CreateAttributeRequest {
                product_id: product.id,
                attribute_type: "Material".into(),
                attribute_value: "Cotton".into(),
            },
        )
        .await?;

        tracing::info!(product = %product, style_code = %product.style_code, "seeded product");
    }

    tracing::info!(user = %user, "seed completed");
    Ok(())
}

async fn ensure_user(state: &AppState, username: &str) -> anyhow::Result<User> {
    if let Some(user) = user_service::find_user_by_username(state, username).await? {
        return Ok(user);
    }
    let user = user_service::create_user(
        state,
        CreateUserRequest {
            username: username.into(),
            email: Some(format!("{username}@example.com")),
        },
    )
    .await?;
    Ok(user)
}

async fn ensure_style(state: &AppState, label: &str) -> anyhow::Result<Style> {
    if let Some(style) = style_service::find_style_by_label(state, label).await? {
        return Ok(style);
    }
    let style = style_service::create_style(state, CreateStyleRequest { style: label.into() }).await?;
    Ok(style)
}
