use catalog_schema::{
    assets::AssetKind,
    models::{FavouriteProduct, Product, ProductAttribute, ProductReview, User},
    pagination::{Page, Pagination},
};
use chrono::Utc;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn sample_product() -> Product {
    Product {
        id: Uuid::new_v4(),
        name: "Denim Jacket".into(),
        description: "Washed denim".into(),
        price: dec!(89.99),
        quantity: 4,
        category_id: Uuid::new_v4(),
        subcategory_id: None,
        image: "product_images/denim.jpg".into(),
        specification: None,
        size: Some("M".into()),
        color: None,
        style_id: None,
        style_code: String::new(),
    }
}

fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        username: "alex".into(),
        email: None,
        created_at: Utc::now(),
    }
}

#[test]
fn labels_name_the_related_rows() {
    let product = sample_product();
    let user = sample_user();

    let attribute = ProductAttribute {
        id: Uuid::new_v4(),
        attribute_type: "Material".into(),
        attribute_value: "Cotton".into(),
        product_id: product.id,
    };
    assert_eq!(attribute.label(&product), "Denim Jacket - Material: Cotton");

    let review = ProductReview {
        id: Uuid::new_v4(),
        product_id: product.id,
        user_id: user.id,
        rating: 5,
        review_text: "Great".into(),
        review_date: Utc::now(),
        review_image: None,
    };
    assert_eq!(review.label(&product, &user), "Review for Denim Jacket by alex");

    let favourite = FavouriteProduct {
        id: Uuid::new_v4(),
        user_id: user.id,
        product_id: product.id,
        date_added: Utc::now(),
    };
    assert_eq!(favourite.label(&user, &product), "alex's Favourite: Denim Jacket");
    assert_eq!(product.to_string(), "Denim Jacket");
}

#[test]
fn asset_references_live_under_upload_dirs() {
    assert_eq!(
        AssetKind::ProductImage.reference("jacket.jpg"),
        "product_images/jacket.jpg"
    );
    assert_eq!(
        AssetKind::CategoryIcon.reference("/shoes.svg"),
        "category_icons/shoes.svg"
    );
    assert_eq!(
        AssetKind::ReviewImage.reference("review_images/a.png"),
        "review_images/a.png"
    );
}

#[test]
fn pagination_is_clamped() {
    assert_eq!(Pagination::default().normalize(), (1, 20, 0));
    assert_eq!(Pagination::new(0, 0).normalize(), (1, 1, 0));
    assert_eq!(Pagination::new(3, 500).normalize(), (3, 100, 200));

    let (page, per_page, offset) = Pagination::new(u64::MAX, 100).normalize();
    assert_eq!((page, per_page), (u64::MAX, 100));
    assert_eq!(offset, i64::MAX as u64);
    assert!(i64::try_from(offset).is_ok());

    let page = Page::new(vec![1, 2], 2, 2, 6);
    assert_eq!(page.meta.total, 6);
    assert_eq!(page.items, vec![1, 2]);
}

#[test]
fn update_payload_separates_absent_from_null() {
    use catalog_schema::dto::categories::UpdateCategoryRequest;

    let absent: UpdateCategoryRequest = serde_json::from_str(r#"{"name":"Shoes"}"#).unwrap();
    assert_eq!(absent.name.as_deref(), Some("Shoes"));
    assert!(absent.icon.is_none());
    assert!(absent.parent_category_id.is_none());

    let cleared: UpdateCategoryRequest =
        serde_json::from_str(r#"{"icon":null,"parent_category_id":null}"#).unwrap();
    assert_eq!(cleared.icon, Some(None));
    assert_eq!(cleared.parent_category_id, Some(None));

    let set: UpdateCategoryRequest =
        serde_json::from_str(r#"{"description":"Footwear"}"#).unwrap();
    assert_eq!(set.description, Some(Some("Footwear".to_string())));
}

#[test]
fn product_serializes_price_exactly() {
    let product = sample_product();
    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(value["price"], "89.99");
    assert_eq!(value["image"], "product_images/denim.jpg");
}
