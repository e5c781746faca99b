//! Whole-archive round-trip and scenario tests exercising the public API
//! the way an editing session would.

use chrono::{TimeZone, Utc};
use watchface::{
    ComplicationItem, ComplicationSampleTemplate, Complications, Customization, Face, FaceType,
    Metadata, Resources, TextProvider, Watchface,
};

fn photos_face() -> Face {
    Face {
        version: 4,
        face_type: FaceType::Photos,
        resource_directory: Some(true),
        customization: Customization {
            color: Some("none".to_string()),
            content: Some("custom".to_string()),
            position: Some("top".to_string()),
            style: None,
        },
        complications: Some(Complications {
            top: Some(ComplicationItem {
                app: "date".to_string(),
                extension: None,
                complication_descriptor: None,
            }),
            ..Complications::default()
        }),
    }
}

fn sample_metadata() -> Metadata {
    let mut metadata = Metadata::default();
    metadata.complications_names.top = "Date".to_string();
    metadata.complications_names.bottom = "Off".to_string();
    metadata.complication_sample_templates.top = Some(
        ComplicationSampleTemplate::UtilitarianSmallFlat {
            text_provider: TextProvider::Time {
                date: Utc.with_ymd_and_hms(2021, 6, 1, 14, 5, 0).unwrap(),
            },
        },
    );
    metadata
}

fn populated_watchface() -> Watchface {
    let mut resources = Resources::new();
    resources.add_image(Some(vec![0xFF, 0xD8, 0xFF, 0xE0])).unwrap();
    resources.add_image(Some(vec![0xFF, 0xD8, 0xFF, 0xE1])).unwrap();
    resources.set_video(1, Some(vec![0x00, 0x00, 0x00, 0x1C])).unwrap();

    Watchface {
        snapshot: vec![0x89, b'P', b'N', b'G'],
        no_borders_snapshot: vec![0x89, b'P', b'N', b'G', 0x0D],
        resources,
        metadata: sample_metadata(),
        face: photos_face(),
    }
}

#[test]
fn full_document_survives_encode_decode() {
    let original = populated_watchface();
    let bytes = original.to_bytes().unwrap();
    let decoded = Watchface::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn encode_is_stable_across_round_trips() {
    let original = populated_watchface();
    let first = original.to_bytes().unwrap();
    let second = Watchface::from_bytes(&first).unwrap().to_bytes().unwrap();
    assert_eq!(first, second);
}

#[test]
fn photos_face_top_slot_renders_time_sample() {
    let bytes = populated_watchface().to_bytes().unwrap();
    let decoded = Watchface::from_bytes(&bytes).unwrap();

    assert_eq!(decoded.face.face_type, FaceType::Photos);
    let complications = decoded.face.complications.as_ref().unwrap();
    assert_eq!(complications.top.as_ref().unwrap().app, "date");

    let template = decoded
        .metadata
        .complication_sample_templates
        .top
        .as_ref()
        .unwrap();
    assert_eq!(template.sample_text(), "14:05");
}

#[test]
fn resource_edits_survive_a_round_trip() {
    let mut watchface = populated_watchface();

    // Drop the first picture and clear the second entry's video.
    let removed = watchface.resources.remove_image(0).unwrap();
    watchface.resources.set_video(0, None).unwrap();

    let decoded = Watchface::from_bytes(&watchface.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.resources.len(), 1);
    assert!(decoded.resources.resolve(&removed.image_url).is_none());
    assert!(!decoded.resources.images()[0].is_iris);
    assert!(decoded.resources.video_bytes(0).is_none());
    assert!(decoded.resources.image_bytes(0).is_some());
}

#[test]
fn custom_image_ceiling_does_not_break_round_trip_equality() {
    // The ceiling is per-session configuration, not document state: a store
    // built for a smaller device model must still compare equal after its
    // document is re-decoded with the default ceiling.
    let mut resources = Resources::with_max_images(3);
    resources.add_image(Some(vec![0xFF, 0xD8])).unwrap();

    let original = Watchface {
        snapshot: vec![0x89, b'P', b'N', b'G'],
        no_borders_snapshot: vec![0x89, b'P', b'N', b'G'],
        resources,
        metadata: sample_metadata(),
        face: photos_face(),
    };
    let decoded = Watchface::from_bytes(&original.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn archive_survives_a_trip_through_the_filesystem() {
    let original = populated_watchface();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Test.watchface");

    std::fs::write(&path, original.to_bytes().unwrap()).unwrap();
    let decoded = Watchface::from_bytes(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn iris_flag_matches_payload_after_decode() {
    let decoded = Watchface::from_bytes(&populated_watchface().to_bytes().unwrap()).unwrap();
    for (index, entry) in decoded.resources.images().iter().enumerate() {
        assert_eq!(entry.is_iris, decoded.resources.video_bytes(index).is_some());
    }
}
