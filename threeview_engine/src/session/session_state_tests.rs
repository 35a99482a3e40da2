/// Tests for SessionState and SessionRecord

use super::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn current() -> SessionState {
    SessionState {
        canvas_size: CanvasSize::new(640, 480, 1.0).unwrap(),
        layout_offset: 10,
        asset_reference: None,
        camera_state: None,
    }
}

fn orbited_camera() -> CameraState {
    let mut camera = CameraState::default();
    camera.orbit(0.4, 0.2);
    camera
}

// ============================================================================
// Tests: Record conversion
// ============================================================================

#[test]
fn test_record_round_trip_through_json() {
    let state = SessionState {
        canvas_size: CanvasSize::new(800, 600, 2.0).unwrap(),
        layout_offset: 12,
        asset_reference: Some("ThreeViewModels/duck.glb".to_string()),
        camera_state: Some(orbited_camera()),
    };

    let json = state.to_record().to_json().unwrap();
    let record = SessionRecord::from_json(&json).unwrap();
    let restored = SessionState::from_record(&record, &current(), &CameraState::default());

    assert_eq!(restored.canvas_size.width(), 800);
    assert_eq!(restored.canvas_size.height(), 600);
    // the device pixel ratio is not persisted
    assert_eq!(restored.canvas_size.pixel_ratio(), 1.0);
    assert_eq!(restored.layout_offset, 12);
    assert_eq!(restored.asset_reference, state.asset_reference);
    assert!(restored.camera_state.unwrap().same_transform(&orbited_camera()));
}

#[test]
fn test_json_field_names() {
    let json = current().to_record().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["size"]["w"], 640);
    assert_eq!(value["size"]["h"], 480);
    assert_eq!(value["size"]["offset"], 10);
    let r = value["size"]["r"].as_f64().unwrap();
    assert!((r - 640.0 / 480.0).abs() < 1e-6);
    assert!(value.get("currentModelPath").is_some());
    assert!(value["camera"].is_null());
}

#[test]
fn test_legacy_aliases_accepted() {
    let json = r#"{
        "size": { "w": 300, "h": 150 },
        "currentModel": "ThreeViewModels/a.glb",
        "camera": { "position": [1, 2, 3], "quaternion": [0, 0, 0, 1], "target": [0, 0, 0] }
    }"#;
    let record = SessionRecord::from_json(json).unwrap();

    assert_eq!(record.current_model_path.as_deref(), Some("ThreeViewModels/a.glb"));
    assert_eq!(record.size.r, None);
    assert_eq!(record.size.offset, 10);
    assert_eq!(record.camera.unwrap().position, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_missing_camera_means_default_framing() {
    let record = SessionRecord::from_json(r#"{ "size": { "w": 512, "h": 512 }, "currentModelPath": null }"#).unwrap();
    let restored = SessionState::from_record(&record, &current(), &CameraState::default());
    assert!(restored.camera_state.is_none());
    assert!(restored.asset_reference.is_none());
}

#[test]
fn test_invalid_size_keeps_current() {
    let record = SessionRecord::from_json(r#"{ "size": { "w": 0, "h": 512, "r": 1, "offset": 4 } }"#).unwrap();
    let restored = SessionState::from_record(&record, &current(), &CameraState::default());
    assert_eq!(restored.canvas_size, current().canvas_size);
    assert_eq!(restored.layout_offset, 4);
}

#[test]
fn test_camera_keeps_current_planes() {
    let base = CameraState::new(Vec3::Z, Vec3::ZERO, 0.5, 50.0, 2.0, 40.0).unwrap();
    let record = SessionRecord {
        size: SizeRecord { w: 10, h: 10, r: Some(1.0), offset: 0 },
        current_model_path: Some(String::new()),
        camera: Some(CameraRecord {
            position: Vec3::new(0.0, 0.0, 9.0),
            orientation: Quat::IDENTITY,
            target: Vec3::ZERO,
        }),
    };
    let restored = SessionState::from_record(&record, &current(), &base);
    let camera = restored.camera_state.unwrap();

    assert_eq!((camera.near(), camera.far(), camera.fov()), (0.5, 50.0, 40.0));
    assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 9.0));
    // empty path is treated as no asset
    assert!(restored.asset_reference.is_none());
}

#[test]
fn test_malformed_json_is_invalid_resource() {
    assert!(matches!(SessionRecord::from_json("{ nope"), Err(Error::InvalidResource(_))));
    assert!(matches!(SessionRecord::from_json("{}"), Err(Error::InvalidResource(_))));
}

// ============================================================================
// Tests: Aspect ratio
// ============================================================================

#[test]
fn test_r_is_aspect_not_pixel_ratio() {
    let record = SessionRecord::from_json(
        r#"{ "size": { "w": 640, "h": 360, "r": 1.7777, "offset": 10 } }"#,
    )
    .unwrap();
    let restored = SessionState::from_record(&record, &current(), &CameraState::default());

    assert_eq!(restored.canvas_size.pixel_ratio(), 1.0);
    assert_eq!(restored.canvas_size.physical_width(), 640);
    assert_eq!(restored.canvas_size.physical_height(), 360);
}

#[test]
fn test_current_pixel_ratio_is_kept() {
    let mut hidpi = current();
    hidpi.canvas_size = CanvasSize::new(640, 480, 2.0).unwrap();
    let record = SessionRecord::from_json(r#"{ "size": { "w": 300, "h": 150, "r": 2 } }"#).unwrap();

    let restored = SessionState::from_record(&record, &hidpi, &CameraState::default());

    assert_eq!(restored.canvas_size.pixel_ratio(), 2.0);
    assert_eq!(restored.canvas_size.physical_width(), 600);
}

#[test]
fn test_mismatched_aspect_uses_dimensions() {
    let record = SessionRecord::from_json(r#"{ "size": { "w": 400, "h": 100, "r": 1.0 } }"#).unwrap();
    let restored = SessionState::from_record(&record, &current(), &CameraState::default());
    assert_eq!(restored.canvas_size.aspect(), 4.0);
}

// ============================================================================
// Tests: Stored camera shapes
// ============================================================================

#[test]
fn test_object_shaped_camera_loads() {
    let json = r#"{
        "size": { "w": 512, "h": 512, "r": 1, "offset": 10 },
        "currentModel": "ThreeViewModels/a.glb",
        "camera": {
            "position": { "x": 0, "y": 0, "z": 5 },
            "quaternion": { "_x": 0, "_y": 0, "_z": 0, "_w": 1 },
            "target": { "x": 0, "y": 1, "z": 0 }
        }
    }"#;
    let record = SessionRecord::from_json(json).unwrap();
    let camera = record.camera.unwrap();

    assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(camera.orientation, Quat::IDENTITY);
    assert_eq!(camera.target, Vec3::Y);
}

#[test]
fn test_unreadable_camera_keeps_size_and_path() {
    let json = r#"{
        "size": { "w": 300, "h": 150, "offset": 4 },
        "currentModelPath": "ThreeViewModels/a.glb",
        "camera": { "position": "somewhere", "quaternion": 7 }
    }"#;
    let record = SessionRecord::from_json(json).unwrap();

    assert!(record.camera.is_none());
    assert_eq!((record.size.w, record.size.h, record.size.offset), (300, 150, 4));
    assert_eq!(record.current_model_path.as_deref(), Some("ThreeViewModels/a.glb"));

    let restored = SessionState::from_record(&record, &current(), &CameraState::default());
    assert!(restored.camera_state.is_none());
}

#[test]
fn test_null_camera_is_default_framing() {
    let record = SessionRecord::from_json(r#"{ "size": { "w": 8, "h": 8 }, "camera": null }"#).unwrap();
    assert!(record.camera.is_none());
}
