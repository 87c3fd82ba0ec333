use sea_orm::ActiveValue;
use sea_orm::entity::prelude::*;

use crate::style_code;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub quantity: i32,
    pub category_id: Uuid,
    pub subcategory_id: Option<Uuid>,
    pub image: String,
    pub specification: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub style_id: Option<Uuid>,
    pub style_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_delete = "Cascade"
    )]
    Categories,
    #[sea_orm(
        belongs_to = "super::sub_categories::Entity",
        from = "Column::SubcategoryId",
        to = "super::sub_categories::Column::Id",
        on_delete = "Cascade"
    )]
    SubCategories,
    #[sea_orm(
        belongs_to = "super::styles::Entity",
        from = "Column::StyleId",
        to = "super::styles::Column::Id",
        on_delete = "SetNull"
    )]
    Styles,
    #[sea_orm(has_many = "super::product_attributes::Entity")]
    ProductAttributes,
    #[sea_orm(has_many = "super::product_reviews::Entity")]
    ProductReviews,
    #[sea_orm(has_many = "super::favourite_products::Entity")]
    FavouriteProducts,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::sub_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCategories.def()
    }
}

impl Related<super::styles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Styles.def()
    }
}

impl Related<super::product_attributes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductAttributes.def()
    }
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

impl ActiveModel {
    /// Before-persist step: fill an empty `style_code` when a style is attached.
    ///
    /// A code that is already present is never replaced, whatever happens to
    /// `style_id`. Without a style the code stays empty. On insert a code that
    /// was never set counts as empty; on update it is left alone. Returns
    /// whether a new code was assigned.
    pub fn assign_style_code(&mut self, insert: bool) -> bool {
        let code_missing = match &self.style_code {
            ActiveValue::Set(code) | ActiveValue::Unchanged(code) => code.is_empty(),
            ActiveValue::NotSet => insert,
        };
        let style_attached = matches!(
            &self.style_id,
            ActiveValue::Set(Some(_)) | ActiveValue::Unchanged(Some(_))
        );

        if !code_missing {
            return false;
        }
        if !style_attached {
            if insert && matches!(self.style_code, ActiveValue::NotSet) {
                self.style_code = ActiveValue::Set(String::new());
            }
            return false;
        }

        self.style_code = ActiveValue::Set(style_code::generate());
        true
    }

    /// Partial updates leave columns `NotSet`. Fill the style columns from the
    /// stored row as `Unchanged` so the guard sees what is actually persisted.
    async fn load_stored_style<C>(&mut self, db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let code_unknown = matches!(self.style_code, ActiveValue::NotSet);
        let style_unknown = matches!(self.style_id, ActiveValue::NotSet);
        if !code_unknown && !style_unknown {
            return Ok(());
        }
        let id = match &self.id {
            ActiveValue::Set(id) | ActiveValue::Unchanged(id) => *id,
            ActiveValue::NotSet => return Ok(()),
        };
        let Some(stored) = Entity::find_by_id(id).one(db).await? else {
            return Ok(());
        };
        if code_unknown {
            self.style_code = ActiveValue::Unchanged(stored.style_code);
        }
        if style_unknown {
            self.style_id = ActiveValue::Unchanged(stored.style_id);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.load_stored_style(db).await?;
        }
        if self.assign_style_code(insert) {
            tracing::debug!(insert, "assigned style code");
        }
        Ok(self)
    }
}
