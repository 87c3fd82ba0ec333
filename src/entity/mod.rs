pub mod categories;
pub mod favourite_products;
pub mod product_attributes;
pub mod product_reviews;
pub mod products;
pub mod styles;
pub mod sub_categories;
pub mod users;

pub use categories::Entity as Categories;
pub use favourite_products::Entity as FavouriteProducts;
pub use product_attributes::Entity as ProductAttributes;
pub use product_reviews::Entity as ProductReviews;
pub use products::Entity as Products;
pub use styles::Entity as Styles;
pub use sub_categories::Entity as SubCategories;
pub use users::Entity as Users;
