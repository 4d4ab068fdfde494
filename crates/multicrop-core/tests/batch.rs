//! End-to-end batch cropping against the real filesystem.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage};
use multicrop_core::{CropRect, CropSession, FsStore, MulticropError, Point, PointerHandler};

fn write_image(path: &Path, width: u32, height: u32, format: ImageFormat) {
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    }));
    img.save_with_format(path, format).unwrap();
}

fn drag(session: &mut CropSession<FsStore>, from: (i32, i32), to: (i32, i32)) {
    session.on_press(Point::new(from.0, from.1));
    session.on_move(Point::new(to.0, to.1));
    session.on_release(Point::new(to.0, to.1));
}

#[test]
fn test_crop_and_save_whole_selection() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<PathBuf> = ["a.png", "b.png", "c.jpg"]
        .iter()
        .map(|name| dir.path().join(name))
        .collect();
    write_image(&files[0], 800, 600, ImageFormat::Png);
    write_image(&files[1], 800, 600, ImageFormat::Png);
    write_image(&files[2], 800, 600, ImageFormat::Jpeg);

    let mut session = CropSession::new(FsStore);
    session.open_selection(files.clone()).unwrap();
    drag(&mut session, (300, 400), (100, 100));
    session.crop().unwrap();
    assert_eq!(
        session.history().as_slice(),
        &[CropRect::new(100, 100, 300, 400)]
    );

    let report = session.save_selection().unwrap();
    assert!(report.is_complete(), "{}", report.summary("saved"));

    for (name, format) in [
        ("Multicropped-a.png", ImageFormat::Png),
        ("Multicropped-b.png", ImageFormat::Png),
        ("Multicropped-c.jpg", ImageFormat::Jpeg),
    ] {
        let path = dir.path().join(name);
        assert_eq!(ImageFormat::from_path(&path).unwrap(), format);
        let img = image::open(&path).unwrap();
        assert_eq!(img.dimensions(), (200, 300));
    }

    // Sources are untouched
    assert_eq!(image::open(&files[1]).unwrap().dimensions(), (800, 600));
}

#[test]
fn test_corrupt_second_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let corrupt = dir.path().join("second.png");
    let third = dir.path().join("third.png");
    write_image(&first, 100, 100, ImageFormat::Png);
    std::fs::write(&corrupt, b"this is not a png").unwrap();
    write_image(&third, 100, 100, ImageFormat::Png);

    let mut session = CropSession::new(FsStore);
    session
        .open_selection(vec![first.clone(), corrupt.clone(), third.clone()])
        .unwrap();
    drag(&mut session, (10, 10), (60, 40));
    session.crop().unwrap();

    let applied = session.apply_selection().unwrap();
    assert_eq!(applied.succeeded.len(), 2);
    assert_eq!(applied.failed.len(), 1);
    assert_eq!(applied.failed[0].path, corrupt);

    let saved = session.persist(&applied.succeeded);
    assert_eq!(saved.succeeded.len(), 2);
    assert!(dir.path().join("Multicropped-first.png").exists());
    assert!(!dir.path().join("Multicropped-second.png").exists());
    assert!(dir.path().join("Multicropped-third.png").exists());
}

#[test]
fn test_unwritable_destination_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("shot.png");
    write_image(&source, 40, 40, ImageFormat::Png);

    let mut session = CropSession::new(FsStore);
    session.load_reference(&source).unwrap();
    drag(&mut session, (0, 0), (20, 20));
    session.crop().unwrap();

    let mut applied = session.apply_all(&[&source]).unwrap();
    // Point the output at a directory that does not exist
    applied.succeeded[0].output = dir.path().join("missing").join("out.png");

    let saved = session.persist(&applied.succeeded);
    assert!(saved.succeeded.is_empty());
    assert!(matches!(saved.failed[0].error, MulticropError::Write { .. }));
}

#[test]
fn test_unreadable_reference_can_be_retried() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");
    let good = dir.path().join("good.png");
    write_image(&good, 10, 10, ImageFormat::Png);

    let mut session = CropSession::new(FsStore);
    assert!(matches!(
        session.open_selection(vec![missing]),
        Err(MulticropError::UnreadableImage { .. })
    ));
    assert!(!session.is_active());

    session.open_selection(vec![good]).unwrap();
    assert!(session.is_active());
}
