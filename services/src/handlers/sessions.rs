use actix_web::{web, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::contexts::Context;
use crate::error::Result;
use crate::photos::PhotoDb;
use crate::sessions::{NameSubmission, SessionDb, SessionId};

pub(crate) fn init_session_routes<C>(cfg: &mut web::ServiceConfig)
where
    C: Context,
{
    cfg.service(
        web::scope("/user")
            .service(web::resource("").route(web::post().to(create_session_handler::<C>)))
            .service(
                web::resource("/{session_id}")
                    .route(web::get().to(session_handler::<C>))
                    .route(web::post().to(submit_name_handler::<C>)),
            )
            .service(
                web::resource("/{session_id}/time")
                    .route(web::get().to(elapsed_time_handler::<C>))
                    .route(web::post().to(record_completion_handler::<C>)),
            ),
    );
}

#[derive(Debug, Deserialize)]
struct CreateSessionQuery {
    photoid: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ElapsedTimeResponse {
    pub time: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RecordCompletionResponse {
    pub message: String,
    pub time: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Creates an anonymous session playing one photo. The timer starts here:
/// `startTime` is fixed at insertion and never changes.
///
/// # Example
///
/// ```text
/// POST /user?photoid=wheres-waldo
/// ```
/// Response:
/// ```text
/// {
///   "id": "2fee8652-3192-4d3e-8adc-14257064224a",
///   "isAnonymous": true,
///   "name": null,
///   "startTime": "2024-05-01T12:00:00Z",
///   "time": null,
///   "photo": "wheres-waldo"
/// }
/// ```
///
/// # Errors
///
/// This call fails if the photo does not exist.
async fn create_session_handler<C: Context>(
    ctx: web::Data<C>,
    query: web::Query<CreateSessionQuery>,
) -> Result<impl Responder> {
    let photo = ctx.photo_db_ref().await.photo(&query.photoid).await?;
    let session = ctx.session_db_ref_mut().await.create(photo.name).await?;

    Ok(web::Json(session))
}

/// Retrieves one session.
///
/// # Errors
///
/// This call fails if the session does not exist.
async fn session_handler<C: Context>(
    ctx: web::Data<C>,
    session_id: web::Path<SessionId>,
) -> Result<impl Responder> {
    let session = ctx
        .session_db_ref()
        .await
        .session(session_id.into_inner())
        .await?;

    Ok(web::Json(session))
}

/// Computes the session's elapsed time at call time. Nothing is persisted:
/// clients drive their displayed timer from `startTime` with the same
/// now-minus-start arithmetic, this is the server-computed convenience
/// value.
///
/// # Errors
///
/// This call fails if the session does not exist.
async fn elapsed_time_handler<C: Context>(
    ctx: web::Data<C>,
    session_id: web::Path<SessionId>,
) -> Result<impl Responder> {
    let session = ctx
        .session_db_ref()
        .await
        .session(session_id.into_inner())
        .await?;

    Ok(web::Json(ElapsedTimeResponse {
        time: session.elapsed_at(Utc::now()),
    }))
}

/// Records a completion: stamps the elapsed time onto the session.
/// Repeatable while the session is anonymous, each call overwrites the
/// value; once the session is named the time is frozen.
///
/// # Errors
///
/// This call fails if the session does not exist.
async fn record_completion_handler<C: Context>(
    ctx: web::Data<C>,
    session_id: web::Path<SessionId>,
) -> Result<impl Responder> {
    let time = ctx
        .session_db_ref_mut()
        .await
        .record_completion(session_id.into_inner())
        .await?;

    Ok(web::Json(RecordCompletionResponse {
        message: "Time saved to leaderboard".to_string(),
        time,
    }))
}

/// Submits a display name, promoting the anonymous session to a leaderboard
/// entry. Single-shot: later calls fail regardless of payload.
///
/// # Example
///
/// ```text
/// POST /user/2fee8652-3192-4d3e-8adc-14257064224a
///
/// { "name": "Ann" }
/// ```
/// Response:
/// ```text
/// { "message": "Saved to leaderboard!" }
/// ```
///
/// # Errors
///
/// This call fails if the session does not exist, was already submitted, or
/// if the name fails validation.
async fn submit_name_handler<C: Context>(
    ctx: web::Data<C>,
    session_id: web::Path<SessionId>,
    submission: web::Json<NameSubmission>,
) -> Result<impl Responder> {
    ctx.session_db_ref_mut()
        .await
        .submit_name(session_id.into_inner(), submission.into_inner())
        .await?;

    Ok(web::Json(MessageResponse {
        message: "Saved to leaderboard!".to_string(),
    }))
}
