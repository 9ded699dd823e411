mod common;

use sqlx::PgPool;
use std::sync::Arc;

use folio::domain::entities::{NewPortfolioItem, PortfolioItemUpdate};
use folio::domain::repositories::PortfolioRepository;
use folio::infrastructure::persistence::PgPortfolioRepository;

#[sqlx::test]
async fn test_create_item(pool: PgPool) {
    let repo = PgPortfolioRepository::new(Arc::new(pool));

    let result = repo
        .create(NewPortfolioItem {
            name: "Side Project".to_string(),
            link: Some("https://example.com".to_string()),
            icon_url: Some("🚀".to_string()),
            blurb: Some("A weekend build".to_string()),
            sort_order: 2,
        })
        .await;

    assert!(result.is_ok());
    let item = result.unwrap();
    assert_eq!(item.name, "Side Project");
    assert_eq!(item.icon_url.as_deref(), Some("🚀"));
    assert_eq!(item.sort_order, 2);
}

#[sqlx::test]
async fn test_list_orders_by_sort_order(pool: PgPool) {
    common::insert_portfolio(&pool, "Second", 20).await;
    common::insert_portfolio(&pool, "First", 10).await;
    let repo = PgPortfolioRepository::new(Arc::new(pool));

    let items = repo.list().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "First");
    assert_eq!(items[1].name, "Second");
}

#[sqlx::test]
async fn test_update_item(pool: PgPool) {
    let id = common::insert_portfolio(&pool, "Old", 0).await;
    let repo = PgPortfolioRepository::new(Arc::new(pool));

    let item = repo
        .update(
            id,
            PortfolioItemUpdate {
                name: "New".to_string(),
                link: None,
                icon_url: None,
                blurb: Some("Rewritten".to_string()),
                sort_order: 7,
            },
        )
        .await
        .unwrap();

    assert_eq!(item.name, "New");
    assert!(item.link.is_none());
    assert_eq!(item.blurb.as_deref(), Some("Rewritten"));
    assert_eq!(item.sort_order, 7);
}

#[sqlx::test]
async fn test_update_missing_item(pool: PgPool) {
    let repo = PgPortfolioRepository::new(Arc::new(pool));

    let result = repo
        .update(
            9999,
            PortfolioItemUpdate {
                name: "Ghost".to_string(),
                link: None,
                icon_url: None,
                blurb: None,
                sort_order: 0,
            },
        )
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_delete_reports_affected(pool: PgPool) {
    let id = common::insert_portfolio(&pool, "Gone", 0).await;
    let repo = PgPortfolioRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
}

#[sqlx::test]
async fn test_count(pool: PgPool) {
    common::insert_portfolio(&pool, "One", 0).await;
    common::insert_portfolio(&pool, "Two", 1).await;
    let repo = PgPortfolioRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 2);
}
