//! HTTP Handlers

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum_extra::extract::WithRejection;
use kernel::id::{DogId, NoticeId, PostId};

use crate::application::config::DogrunConfig;
use crate::application::{
    AddCommentUseCase, AddDogUseCase, CalendarUseCase, CreatePostInput, CreatePostUseCase,
    DeleteDogUseCase, IssueEntryPassUseCase, LikePostUseCase, ListDogsUseCase, ListEventsUseCase,
    ListNoticesUseCase, ListPostsUseCase, ListTagsUseCase, LoginInput, LoginUseCase,
    MarkNoticeReadUseCase, PhotoUpload, RegisterUseCase, ScanEntryPassUseCase, UpdateDogUseCase,
    UpdateProfileUseCase, UploadDogPhotoUseCase,
};
use crate::domain::entity::PostFilter;
use crate::domain::repository::DogrunRepository;
use crate::error::{DogrunError, DogrunResult};
use crate::presentation::dto::{
    AddCommentRequest, CalendarResponse, CommentResponse, CreatePostRequest, DogRequest,
    DogResponse, EntryPassRequest, EntryPassResponse, EntryScanRequest, EntryScanResponse,
    EventResponse, LikeResponse, LoginRequest, MessageResponse, NoticeResponse, PostListQuery,
    PostResponse, RegisterRequest, TagResponse, TokenResponse, UpdateProfileRequest,
    UserResponse,
};
use crate::presentation::extract::ResourceId;
use crate::presentation::middleware::CurrentUser;

/// Shared state for dogrun handlers
#[derive(Clone)]
pub struct DogrunAppState<R>
where
    R: DogrunRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<DogrunConfig>,
}

// ============================================================================
// Auth
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<DogrunAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<RegisterRequest>, DogrunError>,
) -> DogrunResult<(StatusCode, Json<TokenResponse>)>
where
    R: DogrunRepository,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse::bearer(output.access_token, output.expires_in_secs)),
    ))
}

/// POST /auth/login
pub async fn login<R>(
    State(state): State<DogrunAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, DogrunError>,
) -> DogrunResult<Json<TokenResponse>>
where
    R: DogrunRepository,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(TokenResponse::bearer(
        output.access_token,
        output.expires_in_secs,
    )))
}

// ============================================================================
// Users
// ============================================================================

/// GET /users/me
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}

/// PUT /users/profile
pub async fn update_profile<R>(
    State(state): State<DogrunAppState<R>>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(req), _): WithRejection<Json<UpdateProfileRequest>, DogrunError>,
) -> DogrunResult<Json<UserResponse>>
where
    R: DogrunRepository,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone());
    let user = use_case.execute(user, req.into()).await?;

    Ok(Json(UserResponse::from(&user)))
}

// ============================================================================
// Dogs
// ============================================================================

/// GET /dogs
pub async fn list_dogs<R>(
    State(state): State<DogrunAppState<R>>,
    CurrentUser(user): CurrentUser,
) -> DogrunResult<Json<Vec<DogResponse>>>
where
    R: DogrunRepository,
{
    let dogs = ListDogsUseCase::new(state.repo.clone())
        .execute(&user.user_id)
        .await?;

    let months = state.config.vaccine_valid_months;
    Ok(Json(
        dogs.iter()
            .map(|dog| DogResponse::from_dog(dog, months))
            .collect(),
    ))
}

/// POST /dogs
pub async fn add_dog<R>(
    State(state): State<DogrunAppState<R>>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(req), _): WithRejection<Json<DogRequest>, DogrunError>,
) -> DogrunResult<(StatusCode, Json<DogResponse>)>
where
    R: DogrunRepository,
{
    let dog = AddDogUseCase::new(state.repo.clone())
        .execute(user.user_id, req.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DogResponse::from_dog(&dog, state.config.vaccine_valid_months)),
    ))
}

/// PUT /dogs/{dog_id}
pub async fn update_dog<R>(
    State(state): State<DogrunAppState<R>>,
    CurrentUser(user): CurrentUser,
    ResourceId(dog_id): ResourceId<DogId>,
    WithRejection(Json(req), _): WithRejection<Json<DogRequest>, DogrunError>,
) -> DogrunResult<Json<DogResponse>>
where
    R: DogrunRepository,
{
    let dog = UpdateDogUseCase::new(state.repo.clone())
        .execute(&user.user_id, &dog_id, req.into())
        .await?;

    Ok(Json(DogResponse::from_dog(
        &dog,
        state.config.vaccine_valid_months,
    )))
}

/// DELETE /dogs/{dog_id}
pub async fn delete_dog<R>(
    State(state): State<DogrunAppState<R>>,
    CurrentUser(user): CurrentUser,
    ResourceId(dog_id): ResourceId<DogId>,
) -> DogrunResult<Json<MessageResponse>>
where
    R: DogrunRepository,
{
    DeleteDogUseCase::new(state.repo.clone())
        .execute(&user.user_id, &dog_id)
        .await?;

    Ok(Json(MessageResponse::new("Dog deleted")))
}

/// POST /dogs/{dog_id}/photo
///
/// The request body is the raw image; its type comes from `Content-Type`.
pub async fn upload_dog_photo<R>(
    State(state): State<DogrunAppState<R>>,
    CurrentUser(user): CurrentUser,
    ResourceId(dog_id): ResourceId<DogId>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> DogrunResult<Json<DogResponse>>
where
    R: DogrunRepository,
{
    let body = body.map_err(|rejection| {
        let reason = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            "too_large"
        } else {
            "unreadable"
        };
        DogrunError::FileUpload {
            message: rejection.body_text(),
            details: BTreeMap::from([("file".to_string(), reason.to_string())]),
        }
    })?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let upload = PhotoUpload {
        content_type,
        bytes: body.to_vec(),
    };

    let dog = UploadDogPhotoUseCase::new(state.repo.clone(), state.config.clone())
        .execute(&user.user_id, &dog_id, upload)
        .await?;

    Ok(Json(DogResponse::from_dog(
        &dog,
        state.config.vaccine_valid_months,
    )))
}

// ============================================================================
// Posts
// ============================================================================

/// GET /posts?tag=&search=
pub async fn list_posts<R>(
    State(state): State<DogrunAppState<R>>,
    WithRejection(Query(query), _): WithRejection<Query<PostListQuery>, DogrunError>,
) -> DogrunResult<Json<Vec<PostResponse>>>
where
    R: DogrunRepository,
{
    let filter = PostFilter {
        tag: query.tag,
        search: query.search,
    };

    let posts = ListPostsUseCase::new(state.repo.clone())
        .execute(filter)
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// POST /posts
pub async fn create_post<R>(
    State(state): State<DogrunAppState<R>>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(req), _): WithRejection<Json<CreatePostRequest>, DogrunError>,
) -> DogrunResult<(StatusCode, Json<PostResponse>)>
where
    R: DogrunRepository,
{
    let input = CreatePostInput {
        content: req.content,
        category: req.category,
        hashtags: req.hashtags,
    };

    let summary = CreatePostUseCase::new(state.repo.clone())
        .execute(&user, input)
        .await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(summary))))
}

/// POST /posts/{post_id}/like
pub async fn like_post<R>(
    State(state): State<DogrunAppState<R>>,
    ResourceId(post_id): ResourceId<PostId>,
) -> DogrunResult<Json<LikeResponse>>
where
    R: DogrunRepository,
{
    let likes = LikePostUseCase::new(state.repo.clone())
        .execute(&post_id)
        .await?;

    Ok(Json(LikeResponse {
        message: "Post liked".to_string(),
        likes,
    }))
}

/// POST /posts/{post_id}/comments
pub async fn add_comment<R>(
    State(state): State<DogrunAppState<R>>,
    CurrentUser(user): CurrentUser,
    ResourceId(post_id): ResourceId<PostId>,
    WithRejection(Json(req), _): WithRejection<Json<AddCommentRequest>, DogrunError>,
) -> DogrunResult<(StatusCode, Json<CommentResponse>)>
where
    R: DogrunRepository,
{
    let comment = AddCommentUseCase::new(state.repo.clone())
        .execute(&user, post_id, &req.text)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse::new(comment, user.profile.full_name)),
    ))
}

// ============================================================================
// Events
// ============================================================================

/// GET /events
pub async fn list_events<R>(
    State(state): State<DogrunAppState<R>>,
) -> DogrunResult<Json<Vec<EventResponse>>>
where
    R: DogrunRepository,
{
    let events = ListEventsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// GET /calendar/{year}/{month}
pub async fn calendar<R>(
    State(state): State<DogrunAppState<R>>,
    WithRejection(Path((year, month)), _): WithRejection<Path<(i32, u32)>, DogrunError>,
) -> DogrunResult<Json<CalendarResponse>>
where
    R: DogrunRepository,
{
    let events = CalendarUseCase::new(state.repo.clone())
        .execute(year, month)
        .await?;

    Ok(Json(CalendarResponse {
        year,
        month,
        events: events.into_iter().map(EventResponse::from).collect(),
    }))
}

// ============================================================================
// Notices / Tags
// ============================================================================

/// GET /notices
pub async fn list_notices<R>(
    State(state): State<DogrunAppState<R>>,
) -> DogrunResult<Json<Vec<NoticeResponse>>>
where
    R: DogrunRepository,
{
    let notices = ListNoticesUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(notices.into_iter().map(NoticeResponse::from).collect()))
}

/// PUT /notices/{notice_id}/read
pub async fn mark_notice_read<R>(
    State(state): State<DogrunAppState<R>>,
    ResourceId(notice_id): ResourceId<NoticeId>,
) -> DogrunResult<Json<MessageResponse>>
where
    R: DogrunRepository,
{
    MarkNoticeReadUseCase::new(state.repo.clone())
        .execute(&notice_id)
        .await?;

    Ok(Json(MessageResponse::new("Notice marked as read")))
}

/// GET /tags
pub async fn list_tags<R>(
    State(state): State<DogrunAppState<R>>,
) -> DogrunResult<Json<Vec<TagResponse>>>
where
    R: DogrunRepository,
{
    let tags = ListTagsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

// ============================================================================
// Entry
// ============================================================================

/// POST /entry/pass
pub async fn issue_entry_pass<R>(
    State(state): State<DogrunAppState<R>>,
    CurrentUser(user): CurrentUser,
    WithRejection(Json(req), _): WithRejection<Json<EntryPassRequest>, DogrunError>,
) -> DogrunResult<Json<EntryPassResponse>>
where
    R: DogrunRepository,
{
    let issued = IssueEntryPassUseCase::new(state.repo.clone())
        .execute(user.user_id, req.dog_ids)
        .await?;

    Ok(Json(EntryPassResponse {
        qr_data: issued.payload,
        issued_at: issued.pass.timestamp,
    }))
}

/// POST /entry/scan
pub async fn scan_entry_pass<R>(
    State(state): State<DogrunAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<EntryScanRequest>, DogrunError>,
) -> DogrunResult<Json<EntryScanResponse>>
where
    R: DogrunRepository,
{
    let pass = ScanEntryPassUseCase::new(state.repo.clone())
        .execute(&req.qr_data)
        .await?;

    Ok(Json(EntryScanResponse {
        user_id: pass.user_id,
        dog_ids: pass.dog_ids,
        issued_at: pass.timestamp,
    }))
}
