//! SurfaceSource port - where the API surface of a planning pass comes from
//!
//! The plan use case only needs a validated [`ApiSurface`]; whether it was
//! declared in code or read from a manifest is an infrastructure concern.

use crate::domain::entities::ApiSurface;
use crate::error::TriggerResult;

/// Supplies the API surface for one planning pass
pub trait SurfaceSource {
    /// Short description for logs (`builtin`, a manifest path, ...)
    fn describe(&self) -> String;

    /// Produce a validated surface
    fn load(&self) -> TriggerResult<ApiSurface>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl SurfaceSource for Fixed {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn load(&self) -> TriggerResult<ApiSurface> {
            ApiSurface::builder("empty").build()
        }
    }

    #[test]
    fn trait_objects_work() {
        let source: Box<dyn SurfaceSource> = Box::new(Fixed);
        assert_eq!(source.describe(), "fixed");
        assert_eq!(source.load().unwrap().element_count(), 0);
    }
}
