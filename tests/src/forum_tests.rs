use crate::utils::{create_post, list_posts, login, send, send_raw, setup_app, TestWallet};
use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_list_is_public_and_starts_empty() -> Result<()> {
    let (_, app) = setup_app();
    let (status, body) = send(&app, Method::GET, "/posts", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "posts": [] }));
    Ok(())
}

#[tokio::test]
async fn test_mutations_require_a_known_token() -> Result<()> {
    let (state, app) = setup_app();
    let wallet = TestWallet::new(31);
    let token = login(&app, &wallet).await?;
    let post = create_post(&app, &token, "guarded").await?;
    let id = post["id"].as_str().unwrap();

    let routes = [
        "/posts".to_string(),
        format!("/posts/{id}/replies"),
        format!("/posts/{id}/upvote"),
        format!("/posts/{id}/downvote"),
    ];
    for uri in &routes {
        for token in [None, Some("not-a-session"), Some("")] {
            let (status, body) = send(
                &app,
                Method::POST,
                uri,
                token,
                Some(json!({ "content": "x" })),
            )
            .await?;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri} with {token:?}");
            assert_eq!(body, json!({ "error": "Unauthorized" }));
        }
    }

    let stored = state.posts.get(id).unwrap();
    assert_eq!((stored.upvotes, stored.downvotes), (0, 0));
    assert!(stored.replies.is_empty());
    assert_eq!(state.posts.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_create_post_requires_content() -> Result<()> {
    let (state, app) = setup_app();
    let token = login(&app, &TestWallet::new(32)).await?;

    for body in [json!({}), json!({ "content": "" })] {
        let (status, resp) = send(&app, Method::POST, "/posts", Some(&token), Some(body)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp, json!({ "error": "Missing content" }));
    }
    assert!(state.posts.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_posts_listed_in_creation_order() -> Result<()> {
    let (_, app) = setup_app();
    let token = login(&app, &TestWallet::new(33)).await?;

    let mut ids = Vec::new();
    for i in 0..5 {
        let post = create_post(&app, &token, &format!("post {i}")).await?;
        ids.push(post["id"].clone());
    }

    let posts = list_posts(&app).await?;
    assert_eq!(posts.len(), 5);
    let listed: Vec<_> = posts.iter().map(|p| p["id"].clone()).collect();
    assert_eq!(listed, ids);
    assert_eq!(posts[4]["content"], json!("post 4"));
    Ok(())
}

#[tokio::test]
async fn test_upvotes_count_every_call_from_any_wallet() -> Result<()> {
    let (_, app) = setup_app();
    let author = login(&app, &TestWallet::new(34)).await?;
    let voter = login(&app, &TestWallet::new(35)).await?;
    let post = create_post(&app, &author, "vote on me").await?;
    let uri = format!("/posts/{}/upvote", post["id"].as_str().unwrap());

    let mut last = json!(null);
    for token in [&author, &voter, &voter, &author] {
        let (status, body) = send(&app, Method::POST, &uri, Some(token), None).await?;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }
    assert_eq!(last["post"]["upvotes"], json!(4));
    assert_eq!(last["post"]["downvotes"], json!(0));
    assert_eq!(last["post"]["content"], json!("vote on me"));

    let posts = list_posts(&app).await?;
    assert_eq!(posts[0]["upvotes"], json!(4));
    Ok(())
}

#[tokio::test]
async fn test_downvote_returns_updated_post() -> Result<()> {
    let (_, app) = setup_app();
    let token = login(&app, &TestWallet::new(36)).await?;
    let post = create_post(&app, &token, "meh").await?;
    let uri = format!("/posts/{}/downvote", post["id"].as_str().unwrap());

    let (_, _) = send(&app, Method::POST, &uri, Some(&token), None).await?;
    let (status, body) = send(&app, Method::POST, &uri, Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post"]["downvotes"], json!(2));
    assert_eq!(body["post"]["upvotes"], json!(0));
    assert_eq!(body["post"]["id"], post["id"]);
    Ok(())
}

#[tokio::test]
async fn test_vote_on_unknown_post() -> Result<()> {
    let (_, app) = setup_app();
    let token = login(&app, &TestWallet::new(37)).await?;

    for action in ["upvote", "downvote"] {
        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/posts/missing/{action}"),
            Some(&token),
            None,
        )
        .await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Post not found" }));
    }
    Ok(())
}

#[tokio::test]
async fn test_replies_append_in_submission_order() -> Result<()> {
    let (_, app) = setup_app();
    let alice = TestWallet::new(38);
    let bob = TestWallet::new(39);
    let alice_token = login(&app, &alice).await?;
    let bob_token = login(&app, &bob).await?;
    let post = create_post(&app, &alice_token, "thread").await?;
    let uri = format!("/posts/{}/replies", post["id"].as_str().unwrap());

    let (status, first) = send(
        &app,
        Method::POST,
        &uri,
        Some(&bob_token),
        Some(json!({ "content": "first" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["reply"]["author"], json!(bob.address.as_str()));
    assert_eq!(first["reply"]["content"], json!("first"));
    assert!(first["reply"]["id"].is_string());

    let (_, second) = send(
        &app,
        Method::POST,
        &uri,
        Some(&alice_token),
        Some(json!({ "content": "second" })),
    )
    .await?;

    let posts = list_posts(&app).await?;
    assert_eq!(posts[0]["replies"], json!([first["reply"], second["reply"]]));
    Ok(())
}

#[tokio::test]
async fn test_reply_to_unknown_post_leaves_store_untouched() -> Result<()> {
    let (_, app) = setup_app();
    let token = login(&app, &TestWallet::new(40)).await?;
    create_post(&app, &token, "only post").await?;
    let before = list_posts(&app).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/posts/no-such-post/replies",
        Some(&token),
        Some(json!({ "content": "hello?" })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Post not found" }));
    assert_eq!(list_posts(&app).await?, before);
    Ok(())
}

#[tokio::test]
async fn test_reply_content_checked_before_lookup() -> Result<()> {
    let (_, app) = setup_app();
    let token = login(&app, &TestWallet::new(41)).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/posts/no-such-post/replies",
        Some(&token),
        Some(json!({})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing content" }));
    Ok(())
}

#[tokio::test]
async fn test_health_and_metrics() -> Result<()> {
    let (_, app) = setup_app();
    let token = login(&app, &TestWallet::new(42)).await?;
    create_post(&app, &token, "counted").await?;

    let (status, body) = send(&app, Method::GET, "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["posts"], json!(1));
    assert_eq!(body["sessions"], json!(1));
    assert!(body["requests"].as_u64().unwrap() >= 4);

    let (status, headers, bytes) = send_raw(&app, Method::GET, "/metrics", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(headers["content-type"]
        .to_str()?
        .starts_with("text/plain"));
    let text = String::from_utf8(bytes.to_vec())?;
    assert!(text.contains("forum_posts 1\n"));
    assert!(text.contains("forum_sessions 1\n"));
    assert!(text.contains("forum_login_success_total "));
    Ok(())
}
