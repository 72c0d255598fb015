use course_core::model::CourseId;
use storage::repository::{KeyValueStore, Storage, progress_key};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_progress_values() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let key = progress_key(CourseId::new(2));
    assert_eq!(repo.get(&key).await.unwrap(), None);

    repo.set(&key, "[10]").await.unwrap();
    repo.set(&key, "[10,11]").await.unwrap();
    assert_eq!(repo.get(&key).await.unwrap().as_deref(), Some("[10,11]"));

    repo.remove(&key).await.unwrap();
    assert_eq!(repo.get(&key).await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(applied, 1);
}

#[tokio::test]
async fn storage_sqlite_keeps_keys_independent() {
    let storage = Storage::sqlite("sqlite::memory:").await.expect("storage");
    let first = progress_key(CourseId::new(1));
    let second = progress_key(CourseId::new(2));

    storage.kv.set(&first, "[1]").await.unwrap();
    storage.kv.set(&second, "[2,3]").await.unwrap();
    storage.kv.remove(&first).await.unwrap();

    assert_eq!(storage.kv.get(&first).await.unwrap(), None);
    assert_eq!(storage.kv.get(&second).await.unwrap().as_deref(), Some("[2,3]"));
}
