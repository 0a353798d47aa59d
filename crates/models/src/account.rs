use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.trim().is_empty() {
        return Err(ModelError::Validation("email required".into()));
    }
    if !email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_address(address: &str) -> Result<(), ModelError> {
    if address.trim().is_empty() {
        return Err(ModelError::Validation("address required".into()));
    }
    Ok(())
}

/// Insert a new account. The storage layer assigns the id; `date_joined`
/// falls back to today when not supplied.
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    address: &str,
    phone_number: Option<&str>,
    date_joined: Option<Date>,
) -> Result<Model, ModelError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_address(address)?;
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        address: Set(address.to_string()),
        phone_number: Set(phone_number.map(str::to_string)),
        date_joined: Set(date_joined.unwrap_or_else(|| Utc::now().date_naive())),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_required_fields() {
        assert!(validate_name("  ").is_err());
        assert!(validate_email("").is_err());
        assert!(validate_address("\t").is_err());
    }

    #[test]
    fn rejects_email_without_at() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("joe@example.com").is_ok());
    }
}
