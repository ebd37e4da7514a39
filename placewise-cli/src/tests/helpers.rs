//! Test helpers for writing request files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory holding a single `request.json`.
pub(super) fn request_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    (tmp, request_path)
}

pub(super) fn write_json(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
    write_utf8(path, &payload);
}

/// JSON for a place at `(latitude, longitude)`.
pub(super) fn place_json(id: &str, latitude: f64, longitude: f64, rating: f64) -> Value {
    json!({
        "id": id,
        "name": id,
        "location": { "latitude": latitude, "longitude": longitude },
        "rating": rating,
        "reviews": 120,
        "categories": ["cafe"],
    })
}

pub(super) fn parse_output(buffer: &[u8]) -> Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}
