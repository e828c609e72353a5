use actix_files::NamedFile;
use actix_web::{web, Responder};
use snafu::ResultExt;

use crate::config;
use crate::config::get_config_element;
use crate::contexts::Context;
use crate::error::{self, Result};
use crate::photos::{Photo, PhotoDb};
use crate::sessions::SessionDb;

pub(crate) fn init_photo_routes<C>(cfg: &mut web::ServiceConfig)
where
    C: Context,
{
    cfg.service(
        web::scope("/photo")
            .service(web::resource("").route(web::get().to(list_photos_handler::<C>)))
            .service(web::resource("/{photo_name}").route(web::get().to(photo_handler::<C>)))
            .service(
                web::resource("/{photo_name}/main")
                    .route(web::get().to(main_image_handler::<C>)),
            )
            .service(
                web::resource("/{photo_name}/preview")
                    .route(web::get().to(preview_image_handler::<C>)),
            )
            .service(
                web::resource("/{photo_name}/leaderboard")
                    .route(web::get().to(leaderboard_handler::<C>)),
            )
            .service(
                web::resource("/{photo_name}/targets/{target_name}")
                    .route(web::get().to(target_image_handler::<C>)),
            ),
    );
}

/// Lists the whole photo catalog.
///
/// # Example
///
/// ```text
/// GET /photo
/// ```
/// Response:
/// ```text
/// [
///   {
///     "name": "wheres-waldo",
///     "userFriendlyName": "Where's Waldo?",
///     "width": 3000,
///     "height": 2000,
///     "targets": [
///       { "name": "waldo", "position": { "x": 474.0, "y": 1546.0 } },
///       { "name": "wilma", "position": { "x": 2140.0, "y": 1393.0 } }
///     ]
///   }
/// ]
/// ```
async fn list_photos_handler<C: Context>(ctx: web::Data<C>) -> Result<impl Responder> {
    let photos = ctx.photo_db_ref().await.list().await?;

    Ok(web::Json(photos))
}

/// Retrieves details about one photo.
///
/// # Errors
///
/// This call fails if the photo does not exist.
async fn photo_handler<C: Context>(
    ctx: web::Data<C>,
    photo_name: web::Path<String>,
) -> Result<impl Responder> {
    let photo = ctx.photo_db_ref().await.photo(&photo_name).await?;

    Ok(web::Json(photo))
}

/// Returns the photo's leaderboard: every named session playing it, fastest
/// first.
///
/// # Errors
///
/// This call fails if the photo does not exist. A photo without entries
/// yields an empty array.
async fn leaderboard_handler<C: Context>(
    ctx: web::Data<C>,
    photo_name: web::Path<String>,
) -> Result<impl Responder> {
    let photo = ctx.photo_db_ref().await.photo(&photo_name).await?;
    let entries = ctx.session_db_ref().await.leaderboard(&photo.name).await?;

    Ok(web::Json(entries))
}

/// Serves the photo's full-resolution image.
async fn main_image_handler<C: Context>(
    ctx: web::Data<C>,
    photo_name: web::Path<String>,
) -> Result<NamedFile> {
    let photo = ctx.photo_db_ref().await.photo(&photo_name).await?;

    photo_file(&photo, "main.jpg").await
}

/// Serves the photo's preview image.
async fn preview_image_handler<C: Context>(
    ctx: web::Data<C>,
    photo_name: web::Path<String>,
) -> Result<NamedFile> {
    let photo = ctx.photo_db_ref().await.photo(&photo_name).await?;

    photo_file(&photo, "preview.jpg").await
}

/// Serves the icon of one of the photo's targets.
///
/// # Errors
///
/// This call fails if the photo does not exist or has no target with the
/// given name.
async fn target_image_handler<C: Context>(
    ctx: web::Data<C>,
    path: web::Path<(String, String)>,
) -> Result<NamedFile> {
    let (photo_name, target_name) = path.into_inner();

    let photo = ctx.photo_db_ref().await.photo(&photo_name).await?;

    snafu::ensure!(
        photo.has_target(&target_name),
        error::TargetNotFound {
            photo: photo.name.clone(),
            target: target_name.clone(),
        }
    );

    photo_file(&photo, &format!("targets/{target_name}.png")).await
}

/// Resolves a file below the photo's image directory. The path is built from
/// the stored photo name, never from raw request input.
async fn photo_file(photo: &Photo, file_name: &str) -> Result<NamedFile> {
    let photos_config: config::Photos = get_config_element()?;
    let path = photos_config.images_path.join(&photo.name).join(file_name);

    NamedFile::open_async(path).await.context(error::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contexts::InMemoryContext;
    use crate::handlers::ErrorResponse;
    use crate::photos::Photo;
    use crate::sessions::{NameSubmission, SessionDb};
    use crate::util::tests::{seed_waldo_photo, send_test_request};
    use actix_web::test;
    use serial_test::serial;

    #[tokio::test]
    async fn lists_the_catalog() {
        let ctx = InMemoryContext::default();
        let photo = seed_waldo_photo(&ctx).await;

        let req = test::TestRequest::get().uri("/photo");
        let res = send_test_request(req, ctx).await;

        assert_eq!(res.status(), 200);

        let photos: Vec<Photo> = test::read_body_json(res).await;
        assert_eq!(photos, vec![photo]);
    }

    #[tokio::test]
    async fn an_empty_catalog_lists_as_an_empty_array() {
        let ctx = InMemoryContext::default();

        let req = test::TestRequest::get().uri("/photo");
        let res = send_test_request(req, ctx).await;

        assert_eq!(res.status(), 200);

        let photos: Vec<Photo> = test::read_body_json(res).await;
        assert_eq!(photos, Vec::new());
    }

    #[tokio::test]
    async fn retrieves_a_photo_by_name() {
        let ctx = InMemoryContext::default();
        let photo = seed_waldo_photo(&ctx).await;

        let req = test::TestRequest::get().uri("/photo/wheres-waldo");
        let res = send_test_request(req, ctx).await;

        assert_eq!(res.status(), 200);

        let body: Photo = test::read_body_json(res).await;
        assert_eq!(body, photo);
    }

    #[tokio::test]
    async fn an_unknown_photo_is_not_found() {
        let ctx = InMemoryContext::default();

        let req = test::TestRequest::get().uri("/photo/atlantis");
        let res = send_test_request(req, ctx).await;

        ErrorResponse::assert(res, 404, "PhotoNotFound", "Photo not found").await;
    }

    #[tokio::test]
    async fn the_leaderboard_of_a_fresh_photo_is_empty() {
        let ctx = InMemoryContext::default();
        seed_waldo_photo(&ctx).await;

        let req = test::TestRequest::get().uri("/photo/wheres-waldo/leaderboard");
        let res = send_test_request(req, ctx).await;

        assert_eq!(res.status(), 200);

        let entries: Vec<serde_json::Value> = test::read_body_json(res).await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn the_leaderboard_of_an_unknown_photo_is_not_found() {
        let ctx = InMemoryContext::default();

        let req = test::TestRequest::get().uri("/photo/atlantis/leaderboard");
        let res = send_test_request(req, ctx).await;

        ErrorResponse::assert(res, 404, "PhotoNotFound", "Photo not found").await;
    }

    #[tokio::test]
    async fn the_leaderboard_only_contains_named_sessions() {
        let ctx = InMemoryContext::default();
        seed_waldo_photo(&ctx).await;

        let named = ctx
            .session_db_ref_mut()
            .await
            .create("wheres-waldo".to_string())
            .await
            .unwrap();
        let _anonymous = ctx
            .session_db_ref_mut()
            .await
            .create("wheres-waldo".to_string())
            .await
            .unwrap();
        ctx.session_db_ref_mut()
            .await
            .submit_name(
                named.id,
                NameSubmission {
                    name: "Ann".to_string(),
                },
            )
            .await
            .unwrap();

        let req = test::TestRequest::get().uri("/photo/wheres-waldo/leaderboard");
        let res = send_test_request(req, ctx).await;

        assert_eq!(res.status(), 200);

        let entries: Vec<serde_json::Value> = test::read_body_json(res).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "Ann");
    }

    #[tokio::test]
    async fn an_unknown_target_icon_is_not_found() {
        let ctx = InMemoryContext::default();
        seed_waldo_photo(&ctx).await;

        let req = test::TestRequest::get().uri("/photo/wheres-waldo/targets/odlaw");
        let res = send_test_request(req, ctx).await;

        ErrorResponse::assert(
            res,
            404,
            "TargetNotFound",
            "Photo wheres-waldo has no target named odlaw",
        )
        .await;
    }

    #[tokio::test]
    #[serial]
    async fn serves_the_main_image_from_the_images_directory() {
        let images_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(images_dir.path().join("wheres-waldo")).unwrap();
        std::fs::write(
            images_dir.path().join("wheres-waldo/main.jpg"),
            b"jpeg bytes",
        )
        .unwrap();

        crate::config::set_config(
            "photos.images_path",
            images_dir.path().to_str().unwrap(),
        )
        .unwrap();

        let ctx = InMemoryContext::default();
        seed_waldo_photo(&ctx).await;

        let req = test::TestRequest::get().uri("/photo/wheres-waldo/main");
        let res = send_test_request(req, ctx).await;

        assert_eq!(res.status(), 200);

        let body = test::read_body(res).await;
        assert_eq!(body.as_ref(), b"jpeg bytes");
    }

    #[tokio::test]
    #[serial]
    async fn serves_a_target_icon() {
        let images_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(images_dir.path().join("wheres-waldo/targets")).unwrap();
        std::fs::write(
            images_dir.path().join("wheres-waldo/targets/waldo.png"),
            b"png bytes",
        )
        .unwrap();

        crate::config::set_config(
            "photos.images_path",
            images_dir.path().to_str().unwrap(),
        )
        .unwrap();

        let ctx = InMemoryContext::default();
        seed_waldo_photo(&ctx).await;

        let req = test::TestRequest::get().uri("/photo/wheres-waldo/targets/waldo");
        let res = send_test_request(req, ctx).await;

        assert_eq!(res.status(), 200);

        let body = test::read_body(res).await;
        assert_eq!(body.as_ref(), b"png bytes");
    }
}
