use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::OnConflict, DatabaseConnection, Insert, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Value of `role` that grants admin rights.
pub const ROLE_ADMIN: &str = "admin";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub role: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Profile fields written by an upsert. `role` is deliberately absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileFields {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
    pub address: Option<String>,
}

/// Outcome of [`upsert_profile`].
#[derive(Clone, Debug, PartialEq)]
pub enum Upserted {
    Inserted(Model),
    Updated { model: Model, modified: bool },
}

/// `INSERT .. ON CONFLICT (email) DO UPDATE` over the profile columns.
/// `role` and `created_at` are only written when the row is new.
pub fn upsert_statement(email: &str, fields: ProfileFields, now: DateTimeWithTimeZone) -> Insert<ActiveModel> {
    let am = ActiveModel {
        email: Set(email.to_string()),
        name: Set(fields.name),
        phone: Set(fields.phone),
        phone2: Set(fields.phone2),
        address: Set(fields.address),
        role: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Entity::insert(am).on_conflict(
        OnConflict::column(Column::Email)
            .update_columns([Column::Name, Column::Phone, Column::Phone2, Column::Address, Column::UpdatedAt])
            .to_owned(),
    )
}

/// Insert the profile keyed by `email`, or overwrite the profile fields of
/// the existing row. The write is a single atomic statement, so concurrent
/// upserts for one email never collide on the key; the last write wins.
pub async fn upsert_profile(
    db: &DatabaseConnection,
    email: &str,
    fields: ProfileFields,
) -> Result<Upserted, ModelError> {
    if email.trim().is_empty() {
        return Err(ModelError::Validation("email required".into()));
    }
    let existing = Entity::find_by_id(email.to_string()).one(db).await?;
    if let Some(current) = &existing {
        let unchanged = current.name == fields.name
            && current.phone == fields.phone
            && current.phone2 == fields.phone2
            && current.address == fields.address;
        if unchanged {
            return Ok(Upserted::Updated { model: current.clone(), modified: false });
        }
    }
    upsert_statement(email, fields, Utc::now().into()).exec_without_returning(db).await?;
    let model = Entity::find_by_id(email.to_string())
        .one(db)
        .await?
        .ok_or_else(|| ModelError::Db(format!("user {email} missing after upsert")))?;
    Ok(match existing {
        Some(_) => Upserted::Updated { model, modified: true },
        None => Upserted::Inserted(model),
    })
}
