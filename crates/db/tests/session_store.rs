//! Integration tests for the session repository.

use chrono::{Duration, Utc};
use sqlx::PgPool;

use skilltrack_db::models::session::CreateSession;
use skilltrack_db::models::user::CreateUser;
use skilltrack_db::repositories::{SessionRepo, UserRepo};

async fn create_user(pool: &PgPool, username: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: "$argon2id$fake-hash".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");
    user.id
}

fn session_input(user_id: i64, hash: &str, ttl: Duration) -> CreateSession {
    CreateSession {
        user_id,
        refresh_token_hash: hash.to_string(),
        expires_at: Utc::now() + ttl,
        user_agent: None,
        ip_address: None,
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn lookup_skips_revoked_and_expired_sessions(pool: PgPool) {
    let user_id = create_user(&pool, "demo").await;

    let active = SessionRepo::create(&pool, &session_input(user_id, "hash-a", Duration::days(7)))
        .await
        .unwrap();
    SessionRepo::create(&pool, &session_input(user_id, "hash-b", Duration::days(-1)))
        .await
        .unwrap();

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-a")
        .await
        .unwrap()
        .is_some());
    assert!(
        SessionRepo::find_by_refresh_token_hash(&pool, "hash-b")
            .await
            .unwrap()
            .is_none(),
        "expired session must not resolve"
    );

    let revoked = SessionRepo::revoke(&pool, active.id).await.unwrap();
    assert!(revoked);
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-a")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn revoke_all_only_touches_one_user(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    SessionRepo::create(&pool, &session_input(alice, "alice-1", Duration::days(7)))
        .await
        .unwrap();
    SessionRepo::create(&pool, &session_input(alice, "alice-2", Duration::days(7)))
        .await
        .unwrap();
    SessionRepo::create(&pool, &session_input(bob, "bob-1", Duration::days(7)))
        .await
        .unwrap();

    let revoked = SessionRepo::revoke_all_for_user(&pool, alice).await.unwrap();
    assert_eq!(revoked, 2);

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "bob-1")
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../migrations")]
async fn cleanup_removes_expired_and_revoked_rows(pool: PgPool) {
    let user_id = create_user(&pool, "demo").await;

    let stale = SessionRepo::create(&pool, &session_input(user_id, "stale", Duration::days(7)))
        .await
        .unwrap();
    SessionRepo::revoke(&pool, stale.id).await.unwrap();
    SessionRepo::create(&pool, &session_input(user_id, "expired", Duration::days(-1)))
        .await
        .unwrap();
    SessionRepo::create(&pool, &session_input(user_id, "live", Duration::days(7)))
        .await
        .unwrap();

    let deleted = SessionRepo::cleanup_expired(&pool).await.unwrap();
    assert_eq!(deleted, 2);

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "live")
        .await
        .unwrap()
        .is_some());
}
