use models::account::{self, Entity as AccountEntity};
use sea_orm::{prelude::Date, ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;

/// List every account. Full scan, no pagination.
pub async fn list_accounts(db: &DatabaseConnection) -> Result<Vec<account::Model>, ServiceError> {
    let rows = AccountEntity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create an account after validation. The storage layer assigns the id.
pub async fn create_account(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    address: &str,
    phone_number: Option<&str>,
    date_joined: Option<Date>,
) -> Result<account::Model, ServiceError> {
    // validations are in models::account
    let created = account::create(db, name, email, address, phone_number, date_joined).await?;
    Ok(created)
}

/// Get an account by id.
pub async fn get_account(db: &DatabaseConnection, id: i32) -> Result<Option<account::Model>, ServiceError> {
    let found = AccountEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Replace an account's fields. The id never changes; `phone_number` is
/// overwritten (absent clears it) and `date_joined` is kept when not given.
pub async fn update_account(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    email: &str,
    address: &str,
    phone_number: Option<&str>,
    date_joined: Option<Date>,
) -> Result<account::Model, ServiceError> {
    let current = AccountEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else { return Err(ServiceError::not_found("account")); };
    account::validate_name(name)?;
    account::validate_email(email)?;
    account::validate_address(address)?;
    let mut am: account::ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.email = Set(email.to_string());
    am.address = Set(address.to_string());
    am.phone_number = Set(phone_number.map(str::to_string));
    if let Some(d) = date_joined {
        am.date_joined = Set(d);
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete an account; returns true if a row was removed.
pub async fn delete_account(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = AccountEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
