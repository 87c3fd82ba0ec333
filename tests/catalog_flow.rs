mod common;

use catalog_schema::{
    dto::products::{ProductQuery, UpdateProductRequest},
    services::product_service,
    style_code::is_well_formed,
};
use rust_decimal_macros::dec;

// Style "Vintage" attached at creation: a code appears and survives the style being cleared.
#[tokio::test]
async fn style_code_is_assigned_once_and_kept() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let vintage = common::ensure_style(state, "Vintage").await?;
    let category = common::create_category(state, None).await?;
    let product = common::create_product(state, category.id, Some(vintage.id)).await?;

    let token = product.style_code.clone();
    assert!(is_well_formed(&token), "unexpected style code {token:?}");

    let stored = product_service::get_product(state, product.id).await?;
    assert_eq!(stored.style_code, token);

    let cleared = product_service::update_product(
        state,
        product.id,
        UpdateProductRequest {
            style_id: Some(None),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(cleared.style_id, None);
    assert_eq!(cleared.style_code, token);

    let resaved = product_service::save_product(state, product.id).await?;
    assert_eq!(resaved.style_code, token);

    Ok(())
}

#[tokio::test]
async fn style_code_stays_empty_without_style() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let category = common::create_category(state, None).await?;
    let product = common::create_product(state, category.id, None).await?;
    assert_eq!(product.style_code, "");

    let first = product_service::save_product(state, product.id).await?;
    assert_eq!(first.style_code, "");

    let second = product_service::update_product(
        state,
        product.id,
        UpdateProductRequest {
            quantity: Some(7),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(second.style_code, "");
    assert_eq!(second.quantity, 7);

    Ok(())
}

#[tokio::test]
async fn changing_style_keeps_existing_code() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let first_style = common::create_style(state, &common::unique("style")).await?;
    let second_style = common::create_style(state, &common::unique("style")).await?;
    let category = common::create_category(state, None).await?;
    let product = common::create_product(state, category.id, Some(first_style.id)).await?;

    let updated = product_service::update_product(
        state,
        product.id,
        UpdateProductRequest {
            style_id: Some(Some(second_style.id)),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(updated.style_id, Some(second_style.id));
    assert_eq!(updated.style_code, product.style_code);

    Ok(())
}

#[tokio::test]
async fn supplied_style_code_is_not_replaced() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let style = common::create_style(state, &common::unique("style")).await?;
    let category = common::create_category(state, None).await?;
    let mut request = common::product_request(category.id, Some(style.id));
    request.style_code = Some("PRESET-001".into());

    let product = product_service::create_product(state, request).await?;
    assert_eq!(product.style_code, "PRESET-001");

    Ok(())
}

// Attaching a style later to a product that never got a code generates one on that save.
#[tokio::test]
async fn late_style_attachment_generates_code() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let style = common::create_style(state, &common::unique("style")).await?;
    let category = common::create_category(state, None).await?;
    let product = common::create_product(state, category.id, None).await?;
    assert_eq!(product.style_code, "");

    let updated = product_service::update_product(
        state,
        product.id,
        UpdateProductRequest {
            style_id: Some(Some(style.id)),
            ..Default::default()
        },
    )
    .await?;
    assert!(is_well_formed(&updated.style_code));

    Ok(())
}

#[tokio::test]
async fn product_fields_round_trip_and_filter_by_category() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let category = common::create_category(state, None).await?;
    let other = common::create_category(state, None).await?;
    let mut request = common::product_request(category.id, None);
    request.price = dec!(12345678.90);
    request.color = Some("Red".into());
    let product = product_service::create_product(state, request).await?;
    common::create_product(state, other.id, None).await?;

    assert_eq!(product.price, dec!(12345678.90));
    assert_eq!(product.image, "product_images/widget.jpg");
    assert_eq!(product.color.as_deref(), Some("Red"));

    let page = product_service::list_products(
        state,
        ProductQuery {
            category_id: Some(category.id),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.items[0].id, product.id);

    Ok(())
}

// Partial entity updates leave the style columns NotSet; the stored code must survive them.
#[tokio::test]
async fn partial_entity_updates_keep_stored_code() -> anyhow::Result<()> {
    use catalog_schema::entity::products;
    use sea_orm::{ActiveModelTrait, ActiveValue::Set, ActiveValue::Unchanged};

    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let vintage = common::ensure_style(state, "Vintage").await?;
    let modern = common::ensure_style(state, "Modern").await?;
    let category = common::create_category(state, None).await?;
    let product = common::create_product(state, category.id, Some(vintage.id)).await?;
    let token = product.style_code.clone();
    assert!(is_well_formed(&token));

    let renamed = products::ActiveModel {
        id: Unchanged(product.id),
        name: Set("Renamed".to_string()),
        ..ActiveModelTrait::default()
    }
    .update(&state.orm)
    .await?;
    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.style_code, token);

    let restyled = products::ActiveModel {
        id: Unchanged(product.id),
        style_id: Set(Some(modern.id)),
        ..ActiveModelTrait::default()
    }
    .update(&state.orm)
    .await?;
    assert_eq!(restyled.style_id, Some(modern.id));
    assert_eq!(restyled.style_code, token);

    let stored = product_service::get_product(state, product.id).await?;
    assert_eq!(stored.style_code, token);

    // An unstyled product gets its code from a style-only partial update.
    let plain = common::create_product(state, category.id, None).await?;
    let styled = products::ActiveModel {
        id: Unchanged(plain.id),
        style_id: Set(Some(vintage.id)),
        ..ActiveModelTrait::default()
    }
    .update(&state.orm)
    .await?;
    assert!(is_well_formed(&styled.style_code), "{:?}", styled.style_code);

    Ok(())
}
