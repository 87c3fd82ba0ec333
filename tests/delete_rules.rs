mod common;

use catalog_schema::{
    dto::{
        categories::CreateSubCategoryRequest,
        favourites::AddFavouriteRequest,
        products::CreateAttributeRequest,
        reviews::CreateReviewRequest,
    },
    error::AppError,
    pagination::Pagination,
    services::{
        attribute_service, category_service, favourite_service, product_service, review_service,
        style_service, subcategory_service, user_service,
    },
};

#[tokio::test]
async fn deleting_category_cascades_and_orphans_children() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let parent = common::create_category(state, None).await?;
    let child = common::create_category(state, Some(parent.id)).await?;
    let subcategory = subcategory_service::create_subcategory(
        state,
        CreateSubCategoryRequest {
            name: "Jackets".into(),
            parent_category_id: parent.id,
        },
    )
    .await?;
    let product = common::create_product(state, parent.id, None).await?;
    let child_product = common::create_product(state, child.id, None).await?;

    category_service::delete_category(state, parent.id).await?;

    assert!(matches!(
        subcategory_service::get_subcategory(state, subcategory.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        product_service::get_product(state, product.id).await,
        Err(AppError::NotFound)
    ));

    let orphan = category_service::get_category(state, child.id).await?;
    assert_eq!(orphan.parent_category_id, None);
    product_service::get_product(state, child_product.id).await?;

    Ok(())
}

#[tokio::test]
async fn deleting_subcategory_removes_its_products() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let category = common::create_category(state, None).await?;
    let subcategory = subcategory_service::create_subcategory(
        state,
        CreateSubCategoryRequest {
            name: "Boots".into(),
            parent_category_id: category.id,
        },
    )
    .await?;
    let mut request = common::product_request(category.id, None);
    request.subcategory_id = Some(subcategory.id);
    let filed = product_service::create_product(state, request).await?;
    let unfiled = common::create_product(state, category.id, None).await?;

    subcategory_service::delete_subcategory(state, subcategory.id).await?;

    assert!(matches!(
        product_service::get_product(state, filed.id).await,
        Err(AppError::NotFound)
    ));
    product_service::get_product(state, unfiled.id).await?;

    Ok(())
}

#[tokio::test]
async fn deleting_style_nulls_reference_but_keeps_product() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let style = common::create_style(state, &common::unique("style")).await?;
    let category = common::create_category(state, None).await?;
    let product = common::create_product(state, category.id, Some(style.id)).await?;

    style_service::delete_style(state, style.id).await?;

    let stored = product_service::get_product(state, product.id).await?;
    assert_eq!(stored.style_id, None);
    assert_eq!(stored.style_code, product.style_code);

    Ok(())
}

#[tokio::test]
async fn deleting_user_removes_reviews_and_favourites() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let user = common::create_user(state).await?;
    let other_user = common::create_user(state).await?;
    let category = common::create_category(state, None).await?;
    let product = common::create_product(state, category.id, None).await?;

    let review = review_service::create_review(
        state,
        CreateReviewRequest {
            product_id: product.id,
            user_id: user.id,
            rating: 4,
            review_text: "Fits well".into(),
            review_image: None,
        },
    )
    .await?;
    let kept_review = review_service::create_review(
        state,
        CreateReviewRequest {
            product_id: product.id,
            user_id: other_user.id,
            rating: 5,
            review_text: "Great".into(),
            review_image: Some("photo.png".into()),
        },
    )
    .await?;
    favourite_service::add_favourite(
        state,
        AddFavouriteRequest {
            user_id: user.id,
            product_id: product.id,
        },
    )
    .await?;

    user_service::delete_user(state, user.id).await?;

    assert!(matches!(
        review_service::get_review(state, review.id).await,
        Err(AppError::NotFound)
    ));
    assert!(review_service::list_user_reviews(state, user.id).await?.is_empty());
    assert!(!favourite_service::is_favourite(state, user.id, product.id).await?);
    let favourites =
        favourite_service::list_favourites(state, user.id, Pagination::default()).await?;
    assert_eq!(favourites.meta.total, 0);

    let kept = review_service::get_review(state, kept_review.id).await?;
    assert_eq!(kept.review_image.as_deref(), Some("review_images/photo.png"));

    Ok(())
}

#[tokio::test]
async fn deleting_product_removes_dependent_rows() -> anyhow::Result<()> {
    let Some(db) = common::setup().await? else {
        return Ok(());
    };
    let state = &db.state;

    let user = common::create_user(state).await?;
    let category = common::create_category(state, None).await?;
    let product = common::create_product(state, category.id, None).await?;
    let attribute = attribute_service::create_attribute(
        state,
        CreateAttributeRequest {
            product_id: product.id,
            attribute_type: "Material".into(),
            attribute_value: "Cotton".into(),
        },
    )
    .await?;
    favourite_service::add_favourite(
        state,
        AddFavouriteRequest {
            user_id: user.id,
            product_id: product.id,
        },
    )
    .await?;

    product_service::delete_product(state, product.id).await?;

    assert!(matches!(
        attribute_service::get_attribute(state, attribute.id).await,
        Err(AppError::NotFound)
    ));
    assert!(!favourite_service::is_favourite(state, user.id, product.id).await?);
    assert!(matches!(
        product_service::delete_product(state, product.id).await,
        Err(AppError::NotFound)
    ));

    Ok(())
}
