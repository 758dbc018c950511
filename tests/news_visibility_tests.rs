mod support;

use std::sync::Arc;

use bulletin_core::application::commands::news::{
    AddCommentCommand, CreateNewsCommand, HideCommentCommand, RemoveNewsCommand,
};
use bulletin_core::application::error::ApplicationError;
use bulletin_core::application::services::ApplicationServices;
use bulletin_core::domain::user::{UserId, Viewer};

use support::{AllowAllPolicy, services_with_policy};

fn viewer(id: i64) -> Viewer {
    Viewer::user(UserId::new(id).unwrap())
}

fn moderator(id: i64) -> Viewer {
    Viewer::moderator(UserId::new(id).unwrap())
}

async fn create_item(services: &ApplicationServices) -> i64 {
    services
        .news_commands
        .create_news(
            &viewer(1),
            CreateNewsCommand {
                title: "Story".into(),
                body: "body".into(),
            },
        )
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn removal_requires_the_moderator_capability() {
    let services = services_with_policy(Arc::new(AllowAllPolicy));
    let id = create_item(&services).await;

    let err = services
        .news_commands
        .remove_news(&viewer(2), RemoveNewsCommand { id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn removed_item_is_not_found_for_ordinary_viewers() {
    let services = services_with_policy(Arc::new(AllowAllPolicy));
    let id = create_item(&services).await;

    services
        .news_commands
        .remove_news(&moderator(9), RemoveNewsCommand { id })
        .await
        .unwrap();

    let err = services.news_queries.get_news(None, id).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
    let err = services
        .news_queries
        .get_news(Some(&viewer(2)), id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn removed_item_stays_previewable_for_non_author_moderators() {
    let services = services_with_policy(Arc::new(AllowAllPolicy));
    let id = create_item(&services).await;

    services
        .news_commands
        .remove_news(&moderator(9), RemoveNewsCommand { id })
        .await
        .unwrap();

    let dto = services
        .news_queries
        .get_news(Some(&moderator(9)), id)
        .await
        .unwrap();
    assert!(!dto.visible);

    // the author gets no moderator preview of their own hidden item
    let err = services
        .news_queries
        .get_news(Some(&moderator(1)), id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn hidden_comments_are_filtered_per_viewer() {
    let services = services_with_policy(Arc::new(AllowAllPolicy));
    let id = create_item(&services).await;

    let kept = services
        .news_commands
        .add_comment(
            &viewer(2),
            AddCommentCommand {
                id,
                body: "fine".into(),
            },
        )
        .await
        .unwrap();
    let hidden = services
        .news_commands
        .add_comment(
            &viewer(3),
            AddCommentCommand {
                id,
                body: "spam".into(),
            },
        )
        .await
        .unwrap();
    services
        .news_commands
        .hide_comment(
            &moderator(9),
            HideCommentCommand {
                id,
                comment_id: hidden.id,
            },
        )
        .await
        .unwrap();

    let public = services.news_queries.visible_comments(None, id).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, kept.id);

    let as_comment_author = services
        .news_queries
        .visible_comments(Some(&viewer(3)), id)
        .await
        .unwrap();
    assert_eq!(as_comment_author.len(), 2);

    let as_moderator = services
        .news_queries
        .visible_comments(Some(&moderator(9)), id)
        .await
        .unwrap();
    assert_eq!(as_moderator.len(), 2);
    // insertion order survives filtering
    assert_eq!(as_moderator[0].id, kept.id);
    assert_eq!(as_moderator[1].id, hidden.id);
}

#[tokio::test]
async fn view_counter_is_monotone() {
    let services = services_with_policy(Arc::new(AllowAllPolicy));
    let id = create_item(&services).await;

    assert_eq!(services.news_commands.record_view(id).await.unwrap(), 1);
    assert_eq!(services.news_commands.record_view(id).await.unwrap(), 2);
    let dto = services.news_queries.get_news(None, id).await.unwrap();
    assert_eq!(dto.views, 2);
}

#[tokio::test]
async fn news_dto_serializes_its_moderation_facing_fields() {
    let services = services_with_policy(Arc::new(AllowAllPolicy));
    let id = create_item(&services).await;

    let dto = services.news_queries.get_news(None, id).await.unwrap();
    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(value["visible"], serde_json::json!(true));
    assert_eq!(value["vote_tally"], serde_json::json!(0));
    assert_eq!(value["has_pending_edits"], serde_json::json!(false));
}
