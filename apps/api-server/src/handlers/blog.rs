//! Blog handlers - create, update, get-one and list.
//!
//! Every route here requires a verified token; the decoded id is the acting
//! author. Lookups that miss answer 400, not 404 - signin is the only route
//! that reports a missing record as 404.

use actix_web::{HttpResponse, web};
use uuid::Uuid;
use validator::Validate;

use scribe_core::domain::{Post, PostWithAuthor};
use scribe_shared::BlogResponse;
use scribe_shared::dto::{BlogRequest, PostAuthor, PostDetailResponse, PostResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_body(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author_id: post.author_id,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn detail_body(detail: PostWithAuthor) -> PostDetailResponse {
    PostDetailResponse {
        title: detail.post.title,
        content: detail.post.content,
        author: PostAuthor {
            name: detail.author_name,
        },
        created_at: detail.post.created_at,
        updated_at: detail.post.updated_at,
    }
}

/// POST /blog/
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = Post::new(identity.user_id, req.title, req.content);
    let created = state.posts.create(post).await.map_err(|e| {
        tracing::error!("Failed to create post: {}", e);
        AppError::Internal("Error creating blog".to_string())
    })?;

    Ok(HttpResponse::Created().json(BlogResponse::new(
        "Blog created successfully",
        post_body(created),
    )))
}

/// PUT /blog/{id}
///
/// Overwrites title and content of the addressed post. The caller's identity
/// is not compared against the post's author; any signed-in user may update
/// any post.
pub async fn update(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let id = path.into_inner();
    let updated = state
        .posts
        .update_content(id, req.title, req.content)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update post {}: {}", id, e);
            AppError::Internal("Error updating blog".to_string())
        })?
        .ok_or_else(|| AppError::BadRequest("Error updating blog".to_string()))?;

    Ok(HttpResponse::Created().json(BlogResponse::new(
        "Blog updated successfully",
        post_body(updated),
    )))
}

/// GET /blog/{id}
pub async fn get(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let detail = state
        .posts
        .find_detail(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load post {}: {}", id, e);
            AppError::Internal("Blog not found".to_string())
        })?
        .ok_or_else(|| AppError::BadRequest("Blog not found".to_string()))?;

    Ok(HttpResponse::Ok().json(BlogResponse::new("Success", detail_body(detail))))
}

/// GET /blog/bulk
pub async fn list(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await.map_err(|e| {
        tracing::error!("Failed to list posts: {}", e);
        AppError::Internal("Blog not found".to_string())
    })?;

    let blog: Vec<PostResponse> = posts.into_iter().map(post_body).collect();

    Ok(HttpResponse::Ok().json(BlogResponse::new("Success", blog)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    use scribe_core::ports::{PasswordHasher, TokenService};
    use scribe_infra::{JwtTokenService, Sha256PasswordHasher};

    use crate::handlers::configure_routes;

    fn fixtures() -> (
        web::Data<AppState>,
        web::Data<Arc<dyn TokenService>>,
        web::Data<Arc<dyn PasswordHasher>>,
    ) {
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new("test-secret"));
        let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Sha256PasswordHasher::new());
        (
            web::Data::new(AppState::in_memory()),
            web::Data::new(token_service),
            web::Data::new(password_hasher),
        )
    }

    macro_rules! service {
        ($state:expr, $tokens:expr, $hasher:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .app_data($tokens)
                    .app_data($hasher)
                    .configure(configure_routes),
            )
            .await
        };
    }

    /// Register a user through the API and hand back the issued token.
    macro_rules! signup {
        ($app:expr, $name:expr, $email:expr) => {{
            let resp = test::call_service(
                $app,
                test::TestRequest::post()
                    .uri("/user/signup")
                    .set_json(json!({
                        "name": $name,
                        "email": $email,
                        "password": "hunter2"
                    }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let body: Value = test::read_body_json(resp).await;
            body["token"].as_str().unwrap().to_string()
        }};
    }

    #[actix_web::test]
    async fn blog_routes_reject_requests_without_a_token() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);

        let requests = vec![
            test::TestRequest::post()
                .uri("/blog/")
                .set_json(json!({"title": "abc", "content": "xyz"}))
                .to_request(),
            test::TestRequest::put()
                .uri(&format!("/blog/{}", Uuid::new_v4()))
                .set_json(json!({"title": "abc", "content": "xyz"}))
                .to_request(),
            test::TestRequest::get().uri("/blog/bulk").to_request(),
            test::TestRequest::get()
                .uri(&format!("/blog/{}", Uuid::new_v4()))
                .to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn garbage_tokens_are_rejected_before_the_handler() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/blog/bulk")
                .insert_header(("Authorization", "Bearer not-a-real-token"))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid token");
    }

    #[actix_web::test]
    async fn create_then_get_round_trips() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens.clone(), hasher);
        let token = signup!(&app, "Ada", "ada@example.com");
        let author_id = tokens.validate_token(&token).unwrap().user_id;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/blog/")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(json!({"title": "First post", "content": "Some words"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Blog created successfully");
        assert_eq!(body["blog"]["authorId"], author_id.to_string().as_str());
        let post_id = body["blog"]["id"].as_str().unwrap().to_string();

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/blog/{}", post_id))
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Success");
        assert_eq!(body["blog"]["title"], "First post");
        assert_eq!(body["blog"]["content"], "Some words");
        assert_eq!(body["blog"]["author"]["name"], "Ada");
        // The projection hides the post id and the raw author id.
        assert!(body["blog"].get("id").is_none());
        assert!(body["blog"].get("authorId").is_none());
        assert!(body["blog"].get("createdAt").is_some());
        assert!(body["blog"].get("updatedAt").is_some());
    }

    #[actix_web::test]
    async fn short_fields_are_rejected_with_detail() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);
        let token = signup!(&app, "Ada", "ada@example.com");

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/blog/")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(json!({"title": "ab", "content": "x"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("title").is_some());
        assert!(body.get("content").is_some());

        // Nothing was stored.
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/blog/bulk")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["blog"], json!([]));
    }

    #[actix_web::test]
    async fn update_changes_content_but_not_identity() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);
        let token = signup!(&app, "Ada", "ada@example.com");

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/blog/")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(json!({"title": "Draft", "content": "Rough words"}))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        let post_id = body["blog"]["id"].as_str().unwrap().to_string();
        let author_id = body["blog"]["authorId"].as_str().unwrap().to_string();

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/blog/{}", post_id))
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(json!({"title": "Final", "content": "Polished words"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Blog updated successfully");
        assert_eq!(body["blog"]["id"], post_id.as_str());
        assert_eq!(body["blog"]["authorId"], author_id.as_str());
        assert_eq!(body["blog"]["title"], "Final");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/blog/{}", post_id))
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["blog"]["title"], "Final");
        assert_eq!(body["blog"]["content"], "Polished words");
    }

    #[actix_web::test]
    async fn any_signed_in_user_may_update_any_post() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);
        let ada = signup!(&app, "Ada", "ada@example.com");
        let bob = signup!(&app, "Bob", "bob@example.com");

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/blog/")
                .insert_header(("Authorization", format!("Bearer {}", ada)))
                .set_json(json!({"title": "Ada's post", "content": "Hers alone"}))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        let post_id = body["blog"]["id"].as_str().unwrap().to_string();
        let author_id = body["blog"]["authorId"].as_str().unwrap().to_string();

        // Authorship is not checked on update.
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/blog/{}", post_id))
                .insert_header(("Authorization", format!("Bearer {}", bob)))
                .set_json(json!({"title": "Edited by Bob", "content": "Not his"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        // The author never changes, even when someone else edits.
        assert_eq!(body["blog"]["authorId"], author_id.as_str());
        assert_eq!(body["blog"]["title"], "Edited by Bob");
    }

    #[actix_web::test]
    async fn update_of_a_missing_post_is_a_400() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);
        let token = signup!(&app, "Ada", "ada@example.com");

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/blog/{}", Uuid::new_v4()))
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(json!({"title": "abc", "content": "xyz"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Error updating blog");
    }

    #[actix_web::test]
    async fn get_of_a_missing_post_is_a_400() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);
        let token = signup!(&app, "Ada", "ada@example.com");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/blog/{}", Uuid::new_v4()))
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Blog not found");
    }

    #[actix_web::test]
    async fn non_uuid_path_ids_are_client_errors() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);
        let token = signup!(&app, "Ada", "ada@example.com");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/blog/not-a-uuid")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn bulk_with_no_posts_is_an_empty_list() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);
        let token = signup!(&app, "Ada", "ada@example.com");

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/blog/bulk")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Success");
        assert_eq!(body["blog"], json!([]));
    }

    #[actix_web::test]
    async fn bulk_lists_every_post() {
        let (state, tokens, hasher) = fixtures();
        let app = service!(state, tokens, hasher);
        let token = signup!(&app, "Ada", "ada@example.com");

        for title in ["First post", "Second post"] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/blog/")
                    .insert_header(("Authorization", format!("Bearer {}", token)))
                    .set_json(json!({"title": title, "content": "Some words"}))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/blog/bulk")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["blog"].as_array().unwrap().len(), 2);
    }
}
