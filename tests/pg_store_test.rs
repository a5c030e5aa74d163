use chrono::{Duration, Utc};
use polls::config::{Config, DATABASE_URL};
use polls::core::models::poll::Poll;
use polls::core::services::poll::{create_poll, get_detail, list_published};
use polls::database::sqlx::PgSqlxManager;

fn ids_in(listed: &[Poll], created: &[&Poll]) -> Vec<i32> {
    listed.iter().filter(|p| created.iter().any(|c| c.id == p.id)).map(|p| p.id).collect()
}

/// Needs a reachable PostgreSQL; does nothing when DATABASE_URL is unset.
/// Everything runs in one transaction that is rolled back at the end.
#[actix_web::test]
async fn postgres_store_filters_and_orders_published_polls() {
    let url = match dotenv::var(DATABASE_URL) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => return,
    };
    let manager = PgSqlxManager::connect(&url, &Config::default()).await.unwrap();
    let mut tx = manager.begin().await.unwrap();
    let now = Utc::now();

    let hello = create_poll(&mut tx, "Hello", now - Duration::days(30)).await.unwrap();
    let listed = list_published(&mut tx, now, None).await.unwrap();
    assert_eq!(ids_in(&listed, &[&hello]), vec![hello.id]);

    let future = create_poll(&mut tx, "Future", now + Duration::days(30)).await.unwrap();
    let listed = list_published(&mut tx, now, None).await.unwrap();
    assert_eq!(ids_in(&listed, &[&hello, &future]), vec![hello.id]);
    assert!(get_detail(&mut tx, future.id, now).await.is_err());
    assert_eq!(get_detail(&mut tx, hello.id, now).await.unwrap().question, "Hello");

    let same_time = now - Duration::days(60);
    let poll1 = create_poll(&mut tx, "Poll1", same_time).await.unwrap();
    let poll2 = create_poll(&mut tx, "Poll2", same_time).await.unwrap();
    let listed = list_published(&mut tx, now, None).await.unwrap();
    assert_eq!(ids_in(&listed, &[&hello, &poll1, &poll2]), vec![hello.id, poll1.id, poll2.id]);

    tx.rollback().await.unwrap();
}
