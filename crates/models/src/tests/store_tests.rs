use anyhow::Result;
use sea_orm::EntityTrait;

use super::setup_test_db;
use crate::store::{self, NewStore};

fn new_store(name: &str) -> NewStore {
    NewStore { name: name.into(), address: Some("1 Main St".into()), city: Some("Springfield".into()), phone: None }
}

#[tokio::test]
async fn create_assigns_increasing_ids() -> Result<()> {
    let db = setup_test_db().await?;

    let a = store::create(&db, new_store("A")).await?;
    let b = store::create(&db, new_store("B")).await?;

    assert!(a.id > 0);
    assert!(b.id > a.id);
    assert_eq!(a.name, "A");
    assert_eq!(a.address.as_deref(), Some("1 Main St"));
    assert_eq!(a.phone, None);
    Ok(())
}

#[tokio::test]
async fn list_is_ordered_by_id() -> Result<()> {
    let db = setup_test_db().await?;
    for name in ["c", "a", "b"] {
        store::create(&db, new_store(name)).await?;
    }

    let all = store::list(&db).await?;
    let names: Vec<_> = all.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["c", "a", "b"]);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    Ok(())
}

#[tokio::test]
async fn update_by_id_overwrites_all_fields() -> Result<()> {
    let db = setup_test_db().await?;
    let created = store::create(&db, new_store("Old")).await?;

    let changed = store::Model { id: created.id, name: "New".into(), address: None, city: Some("Shelbyville".into()), phone: Some("555-0100".into()) };
    let updated = store::update_by_id(&db, changed.clone()).await?;
    assert_eq!(updated, Some(changed.clone()));

    let found = store::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(changed));
    Ok(())
}

#[tokio::test]
async fn update_by_id_reports_missing_row() -> Result<()> {
    let db = setup_test_db().await?;
    let ghost = new_store("ghost").with_id(4242);

    assert_eq!(store::update_by_id(&db, ghost).await?, None);
    assert!(store::list(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_by_id_returns_whether_removed() -> Result<()> {
    let db = setup_test_db().await?;
    let created = store::create(&db, new_store("gone")).await?;

    assert!(store::delete_by_id(&db, created.id).await?);
    assert!(!store::delete_by_id(&db, created.id).await?);
    assert!(store::find(&db, created.id).await?.is_none());
    Ok(())
}
