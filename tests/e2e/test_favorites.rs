use crate::e2e::helpers;

use helpers::fixtures::{chicken, jokes_body, knock_knock, programming};
use helpers::TestContext;
use jokes::domain::favorites::{FavoritesError, FAVORITES_KEY};
use jokes::domain::joke::Category;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_start_empty_without_persisted_data(ctx: &TestContext) {
    let favorites = ctx.load_favorites().await;

    assert!(favorites.is_empty().await);
    assert!(favorites.load_error().is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_restore_favorites_after_restart(ctx: &TestContext) {
    let favorites = ctx.load_favorites().await;
    favorites.add(chicken()).await.unwrap();
    favorites.save().await.unwrap();
    drop(favorites);

    let restarted = ctx.load_favorites().await;

    assert_eq!(restarted.favorites().await, vec![chicken()]);
    assert_eq!(restarted.favorites().await[0].kind, "general");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_persist_a_json_array_of_jokes(ctx: &TestContext) {
    let favorites = ctx.load_favorites().await;
    favorites.add(chicken()).await.unwrap();

    let path = ctx.data_dir().join(format!("{}.json", FAVORITES_KEY));
    let stored: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();

    assert_eq!(
        stored,
        json!([{
            "type": "general",
            "setup": "Why did the chicken cross the road?",
            "punchline": "To get to the other side."
        }])
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_corrupted_favorites_without_overwriting(ctx: &TestContext) {
    let path = ctx.data_dir().join(format!("{}.json", FAVORITES_KEY));
    std::fs::write(&path, b"[{\"setup\": 42}").unwrap();

    let favorites = ctx.load_favorites().await;

    assert!(favorites.is_empty().await);
    assert!(matches!(
        favorites.load_error(),
        Some(FavoritesError::PersistenceDecode(_))
    ));
    assert_eq!(std::fs::read(&path).unwrap(), b"[{\"setup\": 42}".to_vec());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_favorite_fetched_jokes_once(ctx: &TestContext) {
    ctx.server.respond_json(jokes_body(&[knock_knock()]));
    let fetcher = ctx.fetcher();
    let favorites = ctx.load_favorites().await;

    fetcher.set_category(Category::KnockKnock);
    fetcher.fetch().await.unwrap();
    assert!(favorites.add(fetcher.current_joke()).await.unwrap());

    // Same joke again, even under a different self-reported type
    ctx.server.respond_json(json!([
        {"type": "general", "setup": "Knock knock.", "punchline": "Who's there?"}
    ]));
    fetcher.fetch().await.unwrap();
    assert!(!favorites.add(fetcher.current_joke()).await.unwrap());

    assert_eq!(favorites.favorites().await, vec![knock_knock()]);
    assert_eq!(ctx.load_favorites().await.favorites().await, vec![knock_knock()]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_persist_removals(ctx: &TestContext) {
    let favorites = ctx.load_favorites().await;
    favorites.add(chicken()).await.unwrap();
    favorites.add(programming()).await.unwrap();
    favorites.add(knock_knock()).await.unwrap();

    let removed = favorites.remove_at([0, 2]).await.unwrap();

    assert_eq!(removed, vec![chicken(), knock_knock()]);
    assert_eq!(ctx.load_favorites().await.favorites().await, vec![programming()]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_removal_atomically(ctx: &TestContext) {
    let favorites = ctx.load_favorites().await;
    favorites.add(chicken()).await.unwrap();
    favorites.add(programming()).await.unwrap();

    let result = favorites.remove_at([1, 7]).await;

    assert_eq!(result, Err(FavoritesError::InvalidIndex { index: 7, len: 2 }));
    assert_eq!(
        ctx.load_favorites().await.favorites().await,
        vec![chicken(), programming()]
    );
}
