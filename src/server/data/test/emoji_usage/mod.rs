use crate::server::{data::emoji_usage::EmojiUsageRepository, error::AppError};
use chrono::Utc;
use test_utils::builder::TestBuilder;

/// Tests counting emoji usage per guild.
///
/// Expected: Ok with counts accumulated and ranked most used first
#[tokio::test]
async fn increments_and_ranks_usage() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmojiUsageRepository::new(db);
    let now = Utc::now();
    repo.increment(100, "👍", now).await?;
    repo.increment(100, "party:123456789012345678", now).await?;
    repo.increment(100, "party:123456789012345678", now).await?;
    repo.increment(200, "👍", now).await?;

    let top = repo.get_top(100, 10).await?;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].emoji, "party:123456789012345678");
    assert_eq!(top[0].usage_count, 2);
    assert_eq!(top[1].emoji, "👍");
    assert_eq!(top[1].usage_count, 1);

    Ok(())
}

/// Tests that the result is capped at the requested limit.
///
/// Expected: Ok with `limit` entries
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmojiUsageRepository::new(db);
    for emoji in ["a:111111111111111", "b:222222222222222", "c:333333333333333"] {
        repo.increment(100, emoji, Utc::now()).await?;
    }

    assert_eq!(repo.get_top(100, 2).await?.len(), 2);

    Ok(())
}
