//! End-to-end runs of the `pad-image` binary.

use std::process::Command;

use image::{GenericImageView, Rgba, RgbaImage};

fn pad_image_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pad-image"));
    cmd.env_remove("PAD_INPUT_PATH")
        .env_remove("PAD_OUTPUT_PATH")
        .env_remove("PAD_TARGET_RATIO")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn pads_image_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    RgbaImage::from_pixel(30, 10, Rgba([200, 10, 10, 255])).save(&input).unwrap();

    let out = pad_image_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Original size: 30x10"), "{stdout}");
    assert!(stdout.contains("New canvas size: 30x12"), "{stdout}");
    assert!(stdout.contains("Saved padded image to"), "{stdout}");

    let padded = image::open(&output).unwrap();
    assert_eq!(padded.dimensions(), (30, 12));
}

#[test]
fn missing_input_exits_one_with_error_line() {
    let dir = tempfile::tempdir().unwrap();

    let out = pad_image_cmd()
        .current_dir(dir.path())
        .arg(dir.path().join("missing.png"))
        .arg(dir.path().join("out.png"))
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Error: "), "{stdout}");
    assert!(stdout.contains("missing.png"), "{stdout}");
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn huge_ratio_exits_one_instead_of_aborting() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    RgbaImage::new(1000, 1000).save(&input).unwrap();

    let out = pad_image_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .arg(dir.path().join("out.png"))
        .args(["--ratio", "1000000"])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Original size: 1000x1000"), "{stdout}");
    assert!(stdout.contains("Error: "), "{stdout}");
    assert!(stdout.contains("Canvas too large"), "{stdout}");
}
