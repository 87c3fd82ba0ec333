use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::users::CreateUserRequest,
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

pub async fn create_user(state: &AppState, payload: CreateUserRequest) -> AppResult<User> {
    let user = ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(payload.username),
        email: Set(payload.email),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(user_id = %user.id, "user created");
    Ok(user_from_entity(user))
}

pub async fn get_user(state: &AppState, id: Uuid) -> AppResult<User> {
    Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(user_from_entity)
        .ok_or(AppError::NotFound)
}

pub async fn find_user_by_username(state: &AppState, username: &str) -> AppResult<Option<User>> {
    let user = Users::find()
        .filter(Column::Username.eq(username))
        .one(&state.orm)
        .await?
        .map(user_from_entity);
    Ok(user)
}

/// Removing a user also removes their reviews and favourites.
pub async fn delete_user(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(user_id = %id, "user deleted");
    Ok(())
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
