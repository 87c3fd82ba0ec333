//! Catalog tables: categories, styles, subcategories, products and the rows
//! hanging off a product (attributes, reviews, favourites).
//!
//! Foreign-key actions carry the lifecycle rules. Deleting a category removes
//! its subcategories and products but only orphans child categories; deleting
//! a style clears `products.style_id`; deleting a product or a user removes the
//! rows that reference it.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Categories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Categories::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Categories::Icon).string_len(100).null())
                    .col(ColumnDef::new(Categories::ParentCategoryId).uuid().null())
                    .col(ColumnDef::new(Categories::Description).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_categories_parent_category")
                            .from(Categories::Table, Categories::ParentCategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Styles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Styles::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Styles::Style)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SubCategories::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(SubCategories::ParentCategoryId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_categories_parent_category")
                            .from(SubCategories::Table, SubCategories::ParentCategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Products::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Products::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Products::Description).text().not_null())
                    .col(ColumnDef::new(Products::Price).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Products::Quantity)
                            .integer()
                            .not_null()
                            .check(Expr::col(Products::Quantity).gte(0)),
                    )
                    .col(ColumnDef::new(Products::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Products::SubcategoryId).uuid().null())
                    .col(ColumnDef::new(Products::Image).string_len(100).not_null())
                    .col(ColumnDef::new(Products::Specification).string_len(100).null())
                    .col(ColumnDef::new(Products::Size).string_len(100).null())
                    .col(ColumnDef::new(Products::Color).string_len(100).null())
                    .col(ColumnDef::new(Products::StyleId).uuid().null())
                    .col(
                        ColumnDef::new(Products::StyleCode)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_subcategory")
                            .from(Products::Table, Products::SubcategoryId)
                            .to(SubCategories::Table, SubCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_style")
                            .from(Products::Table, Products::StyleId)
                            .to(Styles::Table, Styles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductAttributes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductAttributes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProductAttributes::AttributeType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductAttributes::AttributeValue)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProductAttributes::ProductId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_attributes_product")
                            .from(ProductAttributes::Table, ProductAttributes::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductReviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductReviews::ProductId).uuid().not_null())
                    .col(ColumnDef::new(ProductReviews::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(ProductReviews::Rating)
                            .integer()
                            .not_null()
                            .check(Expr::col(ProductReviews::Rating).gte(0)),
                    )
                    .col(ColumnDef::new(ProductReviews::ReviewText).text().not_null())
                    .col(
                        ColumnDef::new(ProductReviews::ReviewDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProductReviews::ReviewImage)
                            .string_len(100)
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_reviews_product")
                            .from(ProductReviews::Table, ProductReviews::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_reviews_user")
                            .from(ProductReviews::Table, ProductReviews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavouriteProducts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavouriteProducts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavouriteProducts::UserId).uuid().not_null())
                    .col(ColumnDef::new(FavouriteProducts::ProductId).uuid().not_null())
                    .col(
                        ColumnDef::new(FavouriteProducts::DateAdded)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_products_user")
                            .from(FavouriteProducts::Table, FavouriteProducts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_products_product")
                            .from(FavouriteProducts::Table, FavouriteProducts::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Postgres does not index referencing columns on its own.
        index_column(
            manager,
            "idx_categories_parent_category_id",
            Categories::Table,
            Categories::ParentCategoryId,
        )
        .await?;
        index_column(
            manager,
            "idx_sub_categories_parent_category_id",
            SubCategories::Table,
            SubCategories::ParentCategoryId,
        )
        .await?;
        index_column(
            manager,
            "idx_products_category_id",
            Products::Table,
            Products::CategoryId,
        )
        .await?;
        index_column(
            manager,
            "idx_products_subcategory_id",
            Products::Table,
            Products::SubcategoryId,
        )
        .await?;
        index_column(
            manager,
            "idx_products_style_id",
            Products::Table,
            Products::StyleId,
        )
        .await?;
        index_column(
            manager,
            "idx_product_attributes_product_id",
            ProductAttributes::Table,
            ProductAttributes::ProductId,
        )
        .await?;
        index_column(
            manager,
            "idx_product_reviews_product_id",
            ProductReviews::Table,
            ProductReviews::ProductId,
        )
        .await?;
        index_column(
            manager,
            "idx_product_reviews_user_id",
            ProductReviews::Table,
            ProductReviews::UserId,
        )
        .await?;
        index_column(
            manager,
            "idx_favourite_products_user_id",
            FavouriteProducts::Table,
            FavouriteProducts::UserId,
        )
        .await?;
        index_column(
            manager,
            "idx_favourite_products_product_id",
            FavouriteProducts::Table,
            FavouriteProducts::ProductId,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table(manager, FavouriteProducts::Table).await?;
        drop_table(manager, ProductReviews::Table).await?;
        drop_table(manager, ProductAttributes::Table).await?;
        drop_table(manager, Products::Table).await?;
        drop_table(manager, SubCategories::Table).await?;
        drop_table(manager, Styles::Table).await?;
        drop_table(manager, Categories::Table).await
    }
}

async fn index_column<T, C>(
    manager: &SchemaManager<'_>,
    name: &str,
    table: T,
    column: C,
) -> Result<(), DbErr>
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    manager
        .create_index(
            Index::create()
                .name(name)
                .if_not_exists()
                .table(table)
                .col(column)
                .to_owned(),
        )
        .await
}

async fn drop_table<T: IntoIden + 'static>(manager: &SchemaManager<'_>, table: T) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(table).if_exists().to_owned())
        .await
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Icon,
    ParentCategoryId,
    Description,
}

#[derive(DeriveIden)]
enum Styles {
    Table,
    Id,
    Style,
}

#[derive(DeriveIden)]
enum SubCategories {
    Table,
    Id,
    Name,
    ParentCategoryId,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Price,
    Quantity,
    CategoryId,
    SubcategoryId,
    Image,
    Specification,
    Size,
    Color,
    StyleId,
    StyleCode,
}

#[derive(DeriveIden)]
enum ProductAttributes {
    Table,
    Id,
    AttributeType,
    AttributeValue,
    ProductId,
}

#[derive(DeriveIden)]
enum ProductReviews {
    Table,
    Id,
    ProductId,
    UserId,
    Rating,
    ReviewText,
    ReviewDate,
    ReviewImage,
}

#[derive(DeriveIden)]
enum FavouriteProducts {
    Table,
    Id,
    UserId,
    ProductId,
    DateAdded,
}
