//! Test helpers for writing plan requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Farm at (10.0, 76.0) with orders A, B and C; plans as B, A, C.
pub(super) const REFERENCE_REQUEST: &str = r#"{
  "origin": { "latitude": 10.0, "longitude": 76.0 },
  "stops": [
    { "id": 1, "latitude": 10.0, "longitude": 76.1 },
    { "id": 2, "latitude": 10.0, "longitude": 76.05 },
    { "id": 3, "latitude": 9.9, "longitude": 76.0 }
  ]
}"#;

/// Directions link for [`REFERENCE_REQUEST`].
pub(super) const REFERENCE_URL: &str = "https://www.google.com/maps/dir/?api=1\
    &origin=10.0,76.0&destination=9.9,76.0&waypoints=10.0,76.05|10.0,76.1";

/// Same orders as [`REFERENCE_REQUEST`] but the farmer never set a location.
pub(super) const NO_ORIGIN_REQUEST: &str = r#"{
  "origin": { "latitude": null, "longitude": null },
  "stops": [
    { "id": 1, "latitude": 10.0, "longitude": 76.1 }
  ]
}"#;

/// Farm with a single order that has no longitude.
pub(super) const UNROUTABLE_REQUEST: &str = r#"{
  "origin": { "latitude": 10.0, "longitude": 76.0 },
  "stops": [
    { "id": 7, "latitude": 10.0 }
  ]
}"#;

/// Temporary directory exposed through UTF-8 paths.
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}
