//! Object mode: localized object annotations become image regions.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{Document, Region, RegionKind};
use crate::vision::LocalizedObjectAnnotation;

use super::geometry::{to_polygon, ScaleBasis};
use super::options::MapOptions;

/// Map localized objects to labeled image regions.
///
/// Object responses carry normalized vertices only and no page size, so the
/// image size from `options` is the scaling basis. Without it the fallback
/// size is used and the resulting coordinates are not meaningful.
pub fn map_object_annotations(
    annotations: &[LocalizedObjectAnnotation],
    options: &MapOptions,
) -> Result<Document> {
    if annotations.is_empty() {
        return Err(Error::NoObjects);
    }

    let basis = match options.image_size {
        Some(size) => ScaleBasis::from(size),
        None => {
            warn!(
                "Image size unknown, scaling objects to {}x{}",
                options.fallback_size.0, options.fallback_size.1
            );
            ScaleBasis::from(options.fallback_size)
        }
    };

    let mut doc = Document::new();
    doc.set_size(basis.width, basis.height);
    doc.image_filename = options.image_filename.clone();

    for annotation in annotations {
        let coords = to_polygon(annotation.bounding_poly.as_ref(), basis);
        if coords.is_degenerate() {
            debug!(
                "Dropping object {:?} with {} points",
                annotation.name,
                coords.len()
            );
            continue;
        }
        doc.add_region(Region::new(RegionKind::Image, coords).with_custom(annotation.name.clone()));
    }

    debug!(
        "Mapped {} of {} objects",
        doc.region_count(),
        annotations.len()
    );
    Ok(doc)
}
