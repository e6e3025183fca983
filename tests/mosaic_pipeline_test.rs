//! Image → mosaic pipeline, through the service and through the binary.

mod common;

use std::path::Path;
use std::process::Command;

use common::fixtures::{write_gradient_png, write_solid_png};
use mosaic_dither::{expand, MosaicQuantizer, Palette, PixelBuffer, Rgb};
use padmosaic::error::MosaicError;
use padmosaic::models::MosaicConfig;
use padmosaic::services::MosaicService;
use pretty_assertions::assert_eq;

fn config_in(dir: &Path) -> MosaicConfig {
    MosaicConfig {
        output: dir.join("export.png"),
        ..Default::default()
    }
}

fn padmosaic() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_padmosaic"));
    command
        .env_remove("CONFIG_FILE")
        .env_remove("MAPPINGS_FILE")
        .env_remove("RUST_LOG");
    command
}

// ============================================================================
// MosaicService
// ============================================================================

#[test]
fn test_all_red_image() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("red.png");
    write_solid_png(&source, 40, 30, [255, 0, 0]);

    let report = MosaicService::new(config_in(dir.path()))
        .unwrap()
        .run(&source)
        .unwrap();

    common::assert_all_labels(&report.labels, 64, "rgb(255, 1, 0)");
    assert_eq!((report.width, report.height), (8, 8));
    assert_eq!(report.output, dir.path().join("export.png"));

    let png = std::fs::read(&report.output).unwrap();
    assert_eq!(png.len(), report.png_bytes);
    let decoded = common::assert_png(&png, 256, 256);
    assert!(decoded.pixels().all(|p| p.0 == [255, 1, 0]));
}

#[test]
fn test_preview_matches_quantized_grid() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("gradient.png");
    write_gradient_png(&source, 64, 48);

    let service = MosaicService::new(config_in(dir.path())).unwrap();
    let image = service.quantize_file(&source).unwrap();
    let report = service.run(&source).unwrap();

    assert_eq!(report.labels, image.label_list());
    let labels = common::assert_palette_labels(&report.labels, 64);

    let decoded = common::assert_png(&std::fs::read(&report.output).unwrap(), 256, 256);
    let expected = expand(&image, 32).unwrap();
    assert_eq!(decoded.as_raw().as_slice(), expected.as_bytes());

    // Block (x, y) carries the color of label y * 8 + x
    let palette = Palette::mosaic();
    for (i, label) in labels.iter().enumerate() {
        let (x, y) = ((i % 8) as u32, (i / 8) as u32);
        let [r, g, b] = decoded.get_pixel(x * 32 + 16, y * 32 + 16).0;
        let index = palette
            .position(Rgb::new(r, g, b))
            .unwrap_or_else(|| panic!("cell {i} is not a palette color"));
        assert_eq!(palette.label(index), label, "cell {i}");
    }
}

#[test]
fn test_service_matches_library_quantizer() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("gradient.png");
    write_gradient_png(&source, 20, 20);

    let decoded = image::open(&source).unwrap().into_rgb8();
    let buffer = PixelBuffer::from_raw(decoded.into_raw(), 20, 20).unwrap();
    let direct = MosaicQuantizer::mosaic(Palette::mosaic())
        .quantize(&buffer)
        .unwrap();

    let service = MosaicService::new(config_in(dir.path())).unwrap();
    assert_eq!(service.quantize_file(&source).unwrap(), direct);
}

#[test]
fn test_custom_size_and_scale() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("gradient.png");
    write_gradient_png(&source, 50, 50);

    let config = MosaicConfig {
        size: 4,
        scale: 10,
        ..config_in(dir.path())
    };
    let report = MosaicService::new(config).unwrap().run(&source).unwrap();

    common::assert_palette_labels(&report.labels, 16);
    common::assert_png(&std::fs::read(&report.output).unwrap(), 40, 40);
}

#[test]
fn test_custom_palette_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        "palette:\n  - 'rgb(0, 0, 0)'\n  - 'rgb(255, 255, 255)'\nsize: 2\nscale: 1\n",
    )
    .unwrap();
    let source = dir.path().join("white.png");
    write_solid_png(&source, 9, 9, [250, 250, 250]);

    let config = MosaicConfig {
        output: dir.path().join("bw.png"),
        ..MosaicConfig::load(&config_path)
    };
    let report = MosaicService::new(config).unwrap().run(&source).unwrap();

    assert_eq!(
        report.labels,
        "['rgb(255, 255, 255)','rgb(255, 255, 255)','rgb(255, 255, 255)','rgb(255, 255, 255)']"
    );
}

#[test]
fn test_missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let service = MosaicService::new(config_in(dir.path())).unwrap();
    let err = service.run(&dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, MosaicError::SourceMissing(_)));
    assert!(!dir.path().join("export.png").exists());
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_cli_prints_labels_and_saves_preview() {
    let dir = tempfile::tempdir().unwrap();
    write_solid_png(&dir.path().join("red.png"), 16, 16, [255, 0, 0]);

    let output = padmosaic()
        .current_dir(dir.path())
        .args(["mosaic", "red.png"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "{stdout}");
    common::assert_all_labels(lines[0], 64, "rgb(255, 1, 0)");
    assert_eq!(lines[1], "Saved export.png (preview).");
    common::assert_png(&std::fs::read(dir.path().join("export.png")).unwrap(), 256, 256);
}

#[test]
fn test_cli_flags_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_gradient_png(&dir.path().join("in.png"), 30, 30);

    let output = padmosaic()
        .current_dir(dir.path())
        .args(["mosaic", "in.png", "--output", "small.png", "--size", "3", "--scale", "4"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    common::assert_palette_labels(lines.next().unwrap(), 9);
    assert_eq!(lines.next(), Some("Saved small.png (preview)."));
    common::assert_png(&std::fs::read(dir.path().join("small.png")).unwrap(), 12, 12);
}

#[test]
fn test_cli_missing_image_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = padmosaic()
        .current_dir(dir.path())
        .args(["mosaic", "absent.png"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: padmosaic mosaic"), "{stderr}");
    assert!(!dir.path().join("export.png").exists());
}

#[test]
fn test_cli_without_image_argument_fails() {
    let output = padmosaic().arg("mosaic").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}
