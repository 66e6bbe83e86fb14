//! Post handlers - feed, map, composition, and detail lookup.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use gobuddy_core::composer::NewPostRequest;
use gobuddy_core::domain::{Coordinates, Post, SkillLevel};
use gobuddy_core::filter::{CategoryFilter, PostFilter, Surface};
use gobuddy_core::geo;
use gobuddy_shared::ApiResponse;
use gobuddy_shared::dto::{CreatePostRequest, FilterParams};

use crate::middleware::auth::Authenticated;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Feed page: the filtered collection, newest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedView {
    pub posts: Vec<Post>,
    pub total: usize,
}

/// Map page: placeable posts plus the center to frame them around.
#[derive(Debug, Serialize, Deserialize)]
pub struct MapView {
    pub posts: Vec<Post>,
    pub center: Coordinates,
}

/// Outcome of a composition: the new post, the updated collection, and
/// the surface the client should switch to.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComposeView {
    pub post: Post,
    pub posts: Vec<Post>,
    pub surface: Surface,
}

fn parse_filter(params: FilterParams) -> (String, CategoryFilter) {
    let query = params.q.unwrap_or_default();
    let category = CategoryFilter::parse(params.filter.as_deref().unwrap_or_default());
    (query, category)
}

/// GET /api/feed
pub async fn feed(
    state: web::Data<AppState>,
    _session: Authenticated,
    query: web::Query<FilterParams>,
) -> HttpResponse {
    let (q, category) = parse_filter(query.into_inner());
    let posts = PostFilter::feed(q, category).apply(&state.posts.all().await);
    let total = posts.len();

    HttpResponse::Ok().json(ApiResponse::ok(FeedView { posts, total }))
}

/// GET /api/map
pub async fn map_view(
    state: web::Data<AppState>,
    _session: Authenticated,
    query: web::Query<FilterParams>,
) -> HttpResponse {
    let (q, category) = parse_filter(query.into_inner());
    let posts = PostFilter::map(q, category).apply(&state.posts.all().await);

    let center = match state.locator.current_position().await {
        Ok(position) => position,
        Err(e) => {
            tracing::warn!(error = %e, "Position unavailable, centering map on default");
            geo::DEFAULT_CENTER
        }
    };

    HttpResponse::Ok().json(ApiResponse::ok(MapView { posts, center }))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    _session: Authenticated,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let outcome = state
        .composer
        .submit(NewPostRequest {
            content: req.content,
            live_location: req.is_live_location,
            manual_location: req.manual_location,
            sport: req.sport,
            skill_level: req.skill_level.as_deref().and_then(SkillLevel::parse),
            split_bill: req.split_bill,
            paid: req.is_paid,
            price: req.price,
            date: req.date,
            coordinates: req.coordinates.map(|c| Coordinates {
                latitude: c.latitude,
                longitude: c.longitude,
            }),
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        ComposeView {
            post: outcome.post,
            posts: outcome.posts,
            surface: outcome.surface,
        },
        "Post created",
    )))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    _session: Authenticated,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("post with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}
