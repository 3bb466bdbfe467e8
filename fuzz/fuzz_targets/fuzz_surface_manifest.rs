#![no_main]

use std::path::Path;

use apigw_trigger::infrastructure::SurfaceManifest;
use apigw_trigger::TriggerSource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let manifests = [
            SurfaceManifest::from_toml(content, Path::new("fuzz.toml")),
            SurfaceManifest::from_json(content, Path::new("fuzz.json")),
        ];
        for manifest in manifests.into_iter().flatten() {
            // Validation must reject bad references and cycles without panicking
            if let Ok(surface) = manifest.into_surface() {
                let _ = surface.identifier_set(TriggerSource::Handles);
                let _ = surface.identifier_set(TriggerSource::Semantic);
            }
        }
    }
});
