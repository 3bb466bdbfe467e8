//! Infrastructure Layer
//!
//! File and stream input for the domain:
//!
//! - `surface_manifest` - API surfaces from TOML/JSON manifests
//! - `surfaces` - `SurfaceSource` implementations (builtin, manifest)
//! - `identifier_input` - identifier lists from stdin or files

pub mod identifier_input;
pub mod surface_manifest;
pub mod surfaces;

pub use identifier_input::{parse_identifiers, read_identifiers};
pub use surface_manifest::{load_surface, SurfaceManifest};
pub use surfaces::{BuiltinSurface, ManifestSurface, DEFAULT_INVOKE_ARN};
