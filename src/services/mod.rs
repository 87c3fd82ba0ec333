pub mod attribute_service;
pub mod category_service;
pub mod favourite_service;
pub mod product_service;
pub mod review_service;
pub mod style_service;
pub mod subcategory_service;
pub mod user_service;
