use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use newsdesk::db::{ArticleDraft, ArticleStorage, sqlite};

async fn spawn_storage(tag: &str) -> (ArticleStorage, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!(
        "newsdesk-storage-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", db_path.display());
    let pool = sqlite::connect(&database_url)
        .await
        .expect("failed to open database");
    let storage = ArticleStorage::new(pool);
    storage.init_schema().await.expect("failed to init schema");
    (storage, db_path)
}

fn draft(title: &str, content: &str, category: &str) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
    }
}

#[tokio::test]
async fn init_schema_is_idempotent() {
    let (storage, db_path) = spawn_storage("idempotent").await;

    storage.init_schema().await.expect("second init failed");
    let id = storage
        .insert(&draft("t", "c", "k"))
        .await
        .expect("insert failed");
    assert!(id > 0);

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn insert_assigns_monotonic_ids() {
    let (storage, db_path) = spawn_storage("monotonic").await;

    let first = storage.insert(&draft("a", "x", "k")).await.expect("insert");
    let second = storage.insert(&draft("b", "y", "k")).await.expect("insert");
    assert!(second > first);

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn get_by_id_roundtrips_inserted_fields() {
    let (storage, db_path) = spawn_storage("roundtrip").await;

    let d = draft("title", "content", "tech");
    let id = storage.insert(&d).await.expect("insert");

    let article = storage
        .get_by_id(id)
        .await
        .expect("query failed")
        .expect("article missing");
    assert_eq!(article, d.into_article(id));

    assert!(
        storage
            .get_by_id(id + 1)
            .await
            .expect("query failed")
            .is_none()
    );

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn update_reports_affected_rows() {
    let (storage, db_path) = spawn_storage("update").await;

    let id = storage.insert(&draft("a", "b", "c")).await.expect("insert");

    let affected = storage
        .update(id, &draft("x", "y", "z"))
        .await
        .expect("update failed");
    assert_eq!(affected, 1);

    let article = storage
        .get_by_id(id)
        .await
        .expect("query failed")
        .expect("article missing");
    assert_eq!(article.title, "x");
    assert_eq!(article.id, id);

    let affected = storage
        .update(id + 1, &draft("x", "y", "z"))
        .await
        .expect("update failed");
    assert_eq!(affected, 0);

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn delete_reports_affected_rows() {
    let (storage, db_path) = spawn_storage("delete").await;

    let id = storage.insert(&draft("a", "b", "c")).await.expect("insert");

    assert_eq!(storage.delete(id).await.expect("delete failed"), 1);
    assert_eq!(storage.delete(id).await.expect("delete failed"), 0);
    assert!(storage.get_by_id(id).await.expect("query failed").is_none());

    let _ = fs::remove_file(&db_path);
}

#[tokio::test]
async fn list_orders_by_id_and_filters_by_category() {
    let (storage, db_path) = spawn_storage("list").await;

    let a = storage.insert(&draft("a", "1", "tech")).await.expect("insert");
    let b = storage.insert(&draft("b", "2", "sports")).await.expect("insert");
    let c = storage.insert(&draft("c", "3", "tech")).await.expect("insert");

    let all = storage.list(None).await.expect("list failed");
    assert_eq!(
        all.iter().map(|article| article.id).collect::<Vec<_>>(),
        vec![a, b, c]
    );

    let tech = storage.list(Some("tech")).await.expect("list failed");
    assert_eq!(
        tech.iter().map(|article| article.id).collect::<Vec<_>>(),
        vec![a, c]
    );

    assert!(storage.list(Some("absent")).await.expect("list failed").is_empty());

    let _ = fs::remove_file(&db_path);
}
