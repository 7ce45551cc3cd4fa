//! Integration tests for HttpService against a real server.
//!
//! Each test spawns an in-process axum server on 127.0.0.1:0 over a temp data
//! directory, then drives the product entry flow through the HTTP client.

use std::sync::Arc;

use bytes::Bytes;
use stylevision_core::{DraftState, DraftUpdate, Field};
use stylevision_generator::MockGenerator;
use stylevision_server::test_helpers::{spawn_test_server, spawn_test_server_with};
use stylevision_service::{EntryService, HttpService, ServiceError};

const JPEG: &[u8] = b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00test-image";

fn complete_update() -> DraftUpdate {
    DraftUpdate {
        name: Some("Silk Wrap Dress".into()),
        product_types: Some(vec!["Dress".into()]),
        price: Some("129.99".into()),
        brand: Some("Maison Lune".into()),
        colour: Some("Red".into()),
        pattern: Some(vec!["Floral".into()]),
        fabric: Some(vec!["Silk".into()]),
        care: Some(vec!["Dry Clean".into(), "Hand Wash".into()]),
        fit: Some(vec!["Relaxed".into()]),
        garment_closure: Some(vec!["Tie".into()]),
        occasion_region: None,
    }
}

fn catalog_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.records().map(|r| r.unwrap()).collect()
}

#[tokio::test]
async fn health_check_via_http() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);
    svc.health_check().await.unwrap();
}

#[tokio::test]
async fn vocabulary_via_http() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);
    let vocab = svc.vocabulary().await.unwrap();
    assert_eq!(vocab.colour_placeholder, "-- Select Colour --");
    assert!(vocab.fabrics.iter().any(|f| f == "Silk"));
}

#[tokio::test]
async fn full_entry_flow_via_http() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);

    // Start
    let session = svc.create_session().await.unwrap();
    assert_eq!(session.state, DraftState::Empty);
    let id = session.session_id.clone();
    let p_id = session.draft.id.clone();

    // Fill in
    let updated = svc.update_draft(&id, &complete_update()).await.unwrap();
    assert!(updated.price_error.is_none());
    assert_eq!(updated.session.state, DraftState::Filling);
    assert!(updated.session.preview.contains("Product Name: Silk Wrap Dress"));

    // Image
    let with_image = svc
        .upload_image(&id, Bytes::from_static(JPEG))
        .await
        .unwrap();
    let filename = format!("{p_id}.jpg");
    assert_eq!(with_image.draft.image.as_deref(), Some(filename.as_str()));
    assert_eq!(
        std::fs::read(server.image_dir().join(&filename)).unwrap(),
        JPEG
    );

    // Describe
    let described = svc.generate_description(&id).await.unwrap();
    assert_eq!(described.state, DraftState::Described);

    // Save
    let saved = svc.save(&id).await.unwrap();
    assert_eq!(saved.state, DraftState::Saved);
    assert!(!saved.description_failed);
    assert_eq!(saved.record.p_id, p_id.as_str());
    assert_eq!(saved.record.img, filename);
    assert_eq!(saved.record.products, "dress");
    assert_eq!(saved.record.brand, "maison lune");
    assert_eq!(saved.record.theme_merged_fabric_care, "dry clean, hand wash, silk");
    assert_eq!(saved.record.theme_merged_color_pattern, "floral, red");
    assert_eq!(saved.record.theme_merged_fit, "relaxed");
    assert_eq!(saved.session.state, DraftState::Empty);
    assert_ne!(saved.session.draft.id, p_id);

    // Exactly one row on disk, in column order.
    let rows = catalog_rows(&server.csv_path());
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], p_id.as_str());
    assert_eq!(&rows[0][1], "Silk Wrap Dress");
    assert_eq!(&rows[0][3], "129.99");
    assert_eq!(&rows[0][10], "A flowing silk wrap dress in rich red.");

    // Export carries the same row.
    let export = svc.export_csv(&id).await.unwrap();
    let mut reader = csv::Reader::from_reader(export.as_bytes());
    let exported: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(exported, rows);
}

#[tokio::test]
async fn missing_fields_are_all_reported_and_nothing_is_written() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);
    let id = svc.create_session().await.unwrap().session_id;

    let mut update = complete_update();
    update.name = Some("   ".into());
    update.care = Some(Vec::new());
    svc.update_draft(&id, &update).await.unwrap();

    let err = svc.save(&id).await.unwrap_err();
    match err {
        ServiceError::Validation(v) => {
            assert_eq!(v.missing, vec![Field::Name, Field::Image, Field::Care]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(catalog_rows(&server.csv_path()).is_empty());

    let err = svc.generate_description(&id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn invalid_price_is_cleared_via_http() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);
    let id = svc.create_session().await.unwrap().session_id;

    let update = DraftUpdate {
        price: Some("12,50".into()),
        ..Default::default()
    };
    let result = svc.update_draft(&id, &update).await.unwrap();
    assert_eq!(result.price_error.unwrap().input, "12,50");
    assert_eq!(result.session.draft.price, "");
}

#[tokio::test]
async fn unavailable_generator_is_saved_as_error_text() {
    let server =
        spawn_test_server_with(Arc::new(MockGenerator::failure("connection refused"))).await;
    let svc = HttpService::new(&server.base_url);
    let id = svc.create_session().await.unwrap().session_id;
    svc.update_draft(&id, &complete_update()).await.unwrap();
    svc.upload_image(&id, Bytes::from_static(JPEG)).await.unwrap();

    let view = svc.generate_description(&id).await.unwrap();
    let text = view.draft.description.unwrap().display_text();
    assert!(text.starts_with("Error generating description:"));

    let saved = svc.save(&id).await.unwrap();
    assert!(saved.description_failed);
    let rows = catalog_rows(&server.csv_path());
    assert_eq!(&rows[0][10], text.as_str());
}

#[tokio::test]
async fn non_jpeg_upload_is_rejected() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);
    let id = svc.create_session().await.unwrap().session_id;

    let err = svc
        .upload_image(&id, Bytes::from_static(b"\x89PNG\r\n\x1a\n"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
    let err = svc.upload_image(&id, Bytes::new()).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn unknown_vocabulary_value_is_bad_request() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);
    let id = svc.create_session().await.unwrap().session_id;

    let update = DraftUpdate {
        colour: Some("Ultraviolet".into()),
        ..Default::default()
    };
    let err = svc.update_draft(&id, &update).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn clear_starts_over_with_new_id() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);
    let session = svc.create_session().await.unwrap();
    svc.update_draft(&session.session_id, &complete_update())
        .await
        .unwrap();

    let cleared = svc.clear(&session.session_id).await.unwrap();
    assert_eq!(cleared.state, DraftState::Empty);
    assert_ne!(cleared.draft.id, session.draft.id);
    assert!(cleared.draft.name.is_empty());
}

#[tokio::test]
async fn consecutive_saves_append_rows_in_order() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);
    let id = svc.create_session().await.unwrap().session_id;

    let mut ids = Vec::new();
    for name in ["First Dress", "Second Dress"] {
        let mut update = complete_update();
        update.name = Some(name.into());
        svc.update_draft(&id, &update).await.unwrap();
        svc.upload_image(&id, Bytes::from_static(JPEG)).await.unwrap();
        ids.push(svc.save(&id).await.unwrap().record.p_id);
    }

    let rows = catalog_rows(&server.csv_path());
    let saved: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
    assert_eq!(saved, ids.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(svc.get_session(&id).await.unwrap().saved_count, 2);
}

#[tokio::test]
async fn unknown_session_is_not_found_via_http() {
    let server = spawn_test_server().await;
    let svc = HttpService::new(&server.base_url);
    let err = svc.get_session("no-such-session").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
