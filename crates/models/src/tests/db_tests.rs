use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::db::{connect_with_config, ensure_schema};
use crate::user::{self, ProfileFields, Upserted};

async fn live_db() -> Result<Option<DatabaseConnection>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("skip: DATABASE_URL not set");
        return Ok(None);
    };
    let cfg = configs::DatabaseConfig { url, min_connections: 1, ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    ensure_schema(&db).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn ensure_schema_is_repeatable() -> Result<()> {
    let Some(db) = live_db().await? else { return Ok(()) };
    ensure_schema(&db).await?;
    Ok(())
}

#[tokio::test]
async fn upsert_profile_inserts_then_updates_one_row() -> Result<()> {
    let Some(db) = live_db().await? else { return Ok(()) };
    let email = format!("user_{}@example.com", Uuid::new_v4());

    let first = user::upsert_profile(&db, &email, ProfileFields { name: Some("A".into()), ..Default::default() }).await?;
    assert!(matches!(first, Upserted::Inserted(_)));

    let second = user::upsert_profile(&db, &email, ProfileFields { name: Some("A2".into()), ..Default::default() }).await?;
    assert!(matches!(second, Upserted::Updated { modified: true, .. }));

    let found = user::Entity::find_by_id(email.clone()).one(&db).await?.expect("row");
    assert_eq!(found.name.as_deref(), Some("A2"));
    assert_eq!(found.role, None);

    user::Entity::delete_by_id(email).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn concurrent_first_upserts_leave_one_row() -> Result<()> {
    let Some(db) = live_db().await? else { return Ok(()) };
    let email = format!("race_{}@example.com", Uuid::new_v4());

    let mut tasks = Vec::new();
    for i in 0..8 {
        let db = db.clone();
        let email = email.clone();
        tasks.push(tokio::spawn(async move {
            user::upsert_profile(&db, &email, ProfileFields { name: Some(format!("N{i}")), ..Default::default() }).await
        }));
    }
    for task in tasks {
        task.await??;
    }

    let rows = user::Entity::find()
        .filter(user::Column::Email.eq(email.clone()))
        .all(&db)
        .await?;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].name.as_deref().is_some_and(|n| n.starts_with('N')));

    user::Entity::delete_by_id(email).exec(&db).await?;
    Ok(())
}
