//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use mosaic_dither::Palette;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes are a PNG of the given size and return the decoded pixels
pub fn assert_png(bytes: &[u8], width: u32, height: u32) -> image::RgbImage {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    let decoded = image::load_from_memory(bytes)
        .expect("PNG should decode")
        .into_rgb8();
    assert_eq!(
        decoded.dimensions(),
        (width, height),
        "Unexpected preview dimensions"
    );
    decoded
}

/// Parse a printed `['rgb(...)',...]` list into its labels
pub fn parse_label_list(list: &str) -> Vec<String> {
    let inner = list
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or_else(|| panic!("Not a label list: {list}"));
    if inner.is_empty() {
        return Vec::new();
    }
    inner
        .split("','")
        .map(|s| s.trim_matches('\'').to_string())
        .collect()
}

/// Assert a printed label list has `count` labels, all palette entries
pub fn assert_palette_labels(list: &str, count: usize) -> Vec<String> {
    let labels = parse_label_list(list);
    assert_eq!(labels.len(), count, "Unexpected label count in {list}");
    let palette = Palette::mosaic();
    for label in &labels {
        assert!(
            palette.iter().any(|e| e.label() == label),
            "{label} is not a palette entry"
        );
    }
    labels
}

/// Assert every label in a printed list equals `expected`
pub fn assert_all_labels(list: &str, count: usize, expected: &str) {
    let labels = assert_palette_labels(list, count);
    assert!(
        labels.iter().all(|l| l == expected),
        "Expected every cell to be {expected}, got {labels:?}"
    );
}
