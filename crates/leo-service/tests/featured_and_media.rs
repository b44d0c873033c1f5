mod common;

use std::sync::atomic::Ordering;

use chrono::NaiveDate;
use leo_core::{DomainError, ImageFolder};
use leo_service::dto::{CreateProjectRequest, UpdateFeaturedRequest, UploadImageRequest};
use leo_service::{FeaturedService, MediaService, ProjectService, ServiceError};
use uuid::Uuid;

use common::{admin_session, harness, harness_with, HarnessOptions, BASE_URL};

async fn create_projects(h: &common::Harness, n: usize) -> Vec<Uuid> {
    let service = ProjectService::new(&h.ctx);
    let mut ids = Vec::new();
    for i in 0..n {
        let project = service
            .create(
                &admin_session(),
                CreateProjectRequest {
                    title: format!("Project {i}"),
                    description: String::new(),
                    category: None,
                    image_url: format!("{i}.jpg"),
                    gallery_images: vec![],
                    completion_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                    project_ref: None,
                },
            )
            .await
            .unwrap();
        ids.push(project.id);
    }
    ids
}

fn image(name: &str, content_type: &str, size: usize) -> UploadImageRequest {
    UploadImageRequest {
        folder: ImageFolder::Projects,
        subfolder: Some("20250710-sadaham-puja".into()),
        original_name: name.into(),
        custom_name: None,
        content_type: content_type.into(),
        bytes: vec![0; size],
    }
}

// ============================================================================
// Featured lists
// ============================================================================

#[tokio::test]
async fn test_featured_projects_keep_request_order() {
    let h = harness();
    let ids = create_projects(&h, 3).await;
    let order = vec![ids[2], ids[0], ids[1]];

    let featured = FeaturedService::new(&h.ctx)
        .update_projects(&admin_session(), UpdateFeaturedRequest { ids: order.clone() })
        .await
        .unwrap();

    let got: Vec<Uuid> = featured.iter().map(|f| f.project.id).collect();
    assert_eq!(got, order);
    let orders: Vec<i32> = featured.iter().map(|f| f.featured_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_too_many_featured_projects_never_replaces() {
    let h = harness();
    let ids = create_projects(&h, 6).await;

    let err = FeaturedService::new(&h.ctx)
        .update_projects(&admin_session(), UpdateFeaturedRequest { ids })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::FeaturedLimitExceeded { max: 5, .. })
    ));
    assert_eq!(h.featured.replace_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_too_many_featured_achievements_never_replaces() {
    let h = harness();
    let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();

    let err = FeaturedService::new(&h.ctx)
        .update_achievements(&admin_session(), UpdateFeaturedRequest { ids })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Too many featured achievements: max 3");
    assert_eq!(h.featured.replace_calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Media
// ============================================================================

#[tokio::test]
async fn test_upload_image_generates_name_in_subfolder() {
    let h = harness();
    let uploaded = MediaService::new(&h.ctx)
        .upload_image(&admin_session(), image("Photo 1.PNG", "image/png", 10))
        .await
        .unwrap();

    assert!(uploaded.path.starts_with("projects/20250710-sadaham-puja/"));
    assert!(uploaded.path.ends_with(".png"));
    assert_eq!(
        uploaded.url,
        format!("{BASE_URL}/storage/v1/object/public/images/{}", uploaded.path)
    );

    let stored = h.storage.inner.get(&uploaded.path).await.unwrap();
    assert_eq!(stored.content_type, "image/png");
    assert_eq!(stored.cache_control_secs, 3600);
}

#[tokio::test]
async fn test_upload_with_custom_name_refuses_overwrite() {
    let h = harness();
    let media = MediaService::new(&h.ctx);
    let mut request = image("cover.jpeg", "image/jpeg", 10);
    request.custom_name = Some("Cover".into());

    let first = media
        .upload_image(&admin_session(), request.clone())
        .await
        .unwrap();
    assert_eq!(first.path, "projects/20250710-sadaham-puja/cover.jpeg");

    let err = media
        .upload_image(&admin_session(), request)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn test_upload_rejects_non_images_and_oversized_files() {
    let h = harness();
    let media = MediaService::new(&h.ctx);

    let err = media
        .upload_image(&admin_session(), image("notes.pdf", "application/pdf", 10))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Please upload an image file.");

    let err = media
        .upload_image(&admin_session(), image("big.jpg", "image/jpeg", 1024 * 1024 + 1))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Image size must be less than 1MB.");
    assert_eq!(err.status_code(), 413);

    assert_eq!(h.calls.get(), 0);
}

#[tokio::test]
async fn test_upload_images_checks_all_before_uploading() {
    let h = harness();
    let err = MediaService::new(&h.ctx)
        .upload_images(
            &admin_session(),
            vec![
                image("a.jpg", "image/jpeg", 10),
                image("b.txt", "text/plain", 10),
            ],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Domain(DomainError::NotAnImage)));
    assert!(h.storage.inner.is_empty().await);
}

#[tokio::test]
async fn test_delete_image_by_url() {
    let h = harness();
    let media = MediaService::new(&h.ctx);
    let uploaded = media
        .upload_image(&admin_session(), image("a.jpg", "image/jpeg", 10))
        .await
        .unwrap();

    assert!(media.delete_image(&admin_session(), &uploaded.url).await.unwrap());
    assert!(!h.storage.inner.contains(&uploaded.path).await);

    assert!(!media
        .delete_image(&admin_session(), "/portfolio-1.jpg")
        .await
        .unwrap());
    assert!(!media
        .delete_image(
            &admin_session(),
            "https://demo.supabase.co/storage/v1/object/public/other/a.jpg"
        )
        .await
        .unwrap());
}

#[tokio::test]
async fn test_delete_image_ignores_url_host() {
    let h = harness();
    let media = MediaService::new(&h.ctx);

    for base in ["http://demo.supabase.co", "https://cdn.leoparadise.org"] {
        let uploaded = media
            .upload_image(&admin_session(), image("a.jpg", "image/jpeg", 10))
            .await
            .unwrap();
        let url = format!("{base}/storage/v1/object/public/images/{}", uploaded.path);

        assert!(media.delete_image(&admin_session(), &url).await.unwrap(), "{url}");
        assert!(!h.storage.inner.contains(&uploaded.path).await, "{url}");
    }
}

#[tokio::test]
async fn test_delete_image_failure_returns_false() {
    let h = harness_with(HarnessOptions {
        fail_removals: true,
        ..Default::default()
    });
    let deleted = MediaService::new(&h.ctx)
        .delete_image(
            &admin_session(),
            "https://demo.supabase.co/storage/v1/object/public/images/members/a.jpg",
        )
        .await
        .unwrap();
    assert!(!deleted);
}
