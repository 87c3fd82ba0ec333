use sea_orm::entity::prelude::*;

/// Identity rows referenced by reviews and favourites. Credentials live elsewhere.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_reviews::Entity")]
    ProductReviews,
    #[sea_orm(has_many = "super::favourite_products::Entity")]
    FavouriteProducts,
}

impl Related<super::product_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductReviews.def()
    }
}

impl Related<super::favourite_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavouriteProducts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
