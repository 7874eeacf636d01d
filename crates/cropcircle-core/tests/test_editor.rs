mod common;

use cropcircle_core::config::EditorConfig;
use cropcircle_core::editor::{AvatarEditor, LoadOutcome};
use cropcircle_core::error::AvatarError;
use cropcircle_core::geometry::Vec2;
use cropcircle_core::intake::ImageFile;
use cropcircle_core::viewport::{PanResponse, PointerEvent};

use common::{gradient_image, jpeg_file, png_file};

fn editor() -> AvatarEditor {
    AvatarEditor::new(EditorConfig::default()).unwrap()
}

#[test]
fn test_export_without_image_is_export_error() {
    let editor = editor();
    assert!(editor.session().is_none());
    assert!(matches!(editor.export(), Err(AvatarError::Export(_))));
}

#[test]
fn test_begin_export_without_image_is_export_error() {
    let mut editor = editor();
    assert!(matches!(editor.begin_export(), Err(AvatarError::Export(_))));
    assert!(!editor.is_exporting());
}

#[test]
fn test_load_then_export_fresh_image() {
    let mut editor = editor();
    editor.load(jpeg_file(&gradient_image(640, 480))).unwrap();

    let session = editor.session().unwrap();
    assert_eq!(session.slider(), 50);
    assert_eq!(session.offset(), Vec2::ZERO);
    assert!(!session.is_capturing());

    let bytes = editor.export().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (200, 200));
}

#[test]
fn test_export_twice_is_byte_identical() {
    let mut editor = editor();
    editor.load(png_file(&gradient_image(500, 300))).unwrap();
    assert_eq!(editor.export().unwrap(), editor.export().unwrap());
}

#[test]
fn test_new_load_resets_viewport() {
    let mut editor = editor();
    editor.load(png_file(&gradient_image(100, 80))).unwrap();
    {
        let session = editor.session_mut().unwrap();
        session.set_slider(90);
        session.set_offset(Vec2::new(12.0, -4.0));
    }

    editor.load(png_file(&gradient_image(60, 90))).unwrap();
    let session = editor.session().unwrap();
    assert_eq!(session.source().width(), 60);
    assert_eq!(session.slider(), 50);
    assert_eq!(session.offset(), Vec2::ZERO);
}

#[test]
fn test_rejected_file_keeps_existing_session() {
    let mut editor = editor();
    editor.load(png_file(&gradient_image(100, 80))).unwrap();

    let gif = ImageFile::new(None, "image/gif", b"GIF89a".to_vec());
    assert!(matches!(
        editor.load(gif),
        Err(AvatarError::UnsupportedType { .. })
    ));
    assert_eq!(editor.session().unwrap().source().width(), 100);
}

#[test]
fn test_decode_failure_keeps_existing_session() {
    let mut editor = editor();
    editor.load(png_file(&gradient_image(100, 80))).unwrap();
    editor.session_mut().unwrap().set_slider(10);

    let broken = ImageFile::new(None, "image/png", b"\x89PNG garbage".to_vec());
    assert!(matches!(editor.load(broken), Err(AvatarError::Decode(_))));

    let session = editor.session().unwrap();
    assert_eq!(session.source().width(), 100);
    assert_eq!(session.slider(), 10);
}

#[test]
fn test_superseded_decode_is_discarded() {
    let mut editor = editor();
    let first = editor.begin_load(png_file(&gradient_image(30, 30))).unwrap();
    let second = editor.begin_load(png_file(&gradient_image(70, 40))).unwrap();

    assert_eq!(editor.complete_load(first).unwrap(), LoadOutcome::Superseded);
    assert!(editor.session().is_none());

    assert_eq!(editor.complete_load(second).unwrap(), LoadOutcome::Loaded);
    assert_eq!(editor.session().unwrap().source().width(), 70);
}

#[test]
fn test_poll_load_eventually_installs() {
    let mut editor = editor();
    let pending = editor.begin_load(png_file(&gradient_image(40, 40))).unwrap();
    let outcome = loop {
        if let Some(outcome) = editor.poll_load(&pending).unwrap() {
            break outcome;
        }
        std::thread::yield_now();
    };
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert!(editor.session().is_some());
}

#[test]
fn test_only_one_export_in_flight() {
    let mut editor = editor();
    editor.load(png_file(&gradient_image(120, 90))).unwrap();

    let pending = editor.begin_export().unwrap();
    assert!(editor.is_exporting());
    assert!(matches!(editor.begin_export(), Err(AvatarError::Export(_))));

    let bytes = editor.complete_export(pending).unwrap();
    assert!(!editor.is_exporting());
    assert_eq!(bytes, editor.export().unwrap());

    let again = editor.begin_export().unwrap();
    editor.complete_export(again).unwrap();
}

#[test]
fn test_dropped_export_frees_the_slot() {
    let mut editor = editor();
    editor.load(png_file(&gradient_image(120, 90))).unwrap();

    let abandoned = editor.begin_export().unwrap();
    assert!(editor.is_exporting());
    drop(abandoned);
    assert!(!editor.is_exporting());

    editor.load(png_file(&gradient_image(64, 64))).unwrap();
    editor.close();
    editor.load(png_file(&gradient_image(80, 50))).unwrap();

    let pending = editor.begin_export().unwrap();
    let bytes = editor.complete_export(pending).unwrap();
    assert_eq!(bytes, editor.export().unwrap());
}

#[test]
fn test_close_releases_drag_capture() {
    let mut editor = editor();
    editor.load(png_file(&gradient_image(120, 90))).unwrap();
    let session = editor.session_mut().unwrap();
    assert_eq!(
        session.handle_pointer(PointerEvent::Down(Vec2::new(100.0, 100.0))),
        PanResponse::CaptureStarted
    );

    assert_eq!(editor.close(), PanResponse::CaptureReleased);
    assert!(editor.session().is_none());
    assert_eq!(editor.close(), PanResponse::Ignored);
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = EditorConfig::default();
    config.output.jpeg_quality = 0;
    assert!(matches!(
        AvatarEditor::new(config),
        Err(AvatarError::InvalidConfig(_))
    ));
}
