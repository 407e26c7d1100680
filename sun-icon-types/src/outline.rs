/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Static checks over the ray outlines of an [`IconGraphic`].
//!
//! Rendering never parses the outlines; this module exists so a typo in the
//! literal path data fails a test instead of silently dropping a ray from
//! the drawn icon.

use std::fmt;

use kurbo::{BezPath, ParamCurveNearest, PathEl, Point, Rect, Shape, SvgParseError};
use thiserror::Error;

use crate::geometry::IconGraphic;
use crate::sun::{RAY_COUNT, SUN_FILL};

/// Slack for floating point noise at curve extrema.
const BOUNDS_EPSILON: f64 = 1e-6;

/// Accuracy passed to the nearest-point search on curved segments.
const NEAREST_ACCURACY: f64 = 1e-6;

/// A primitive of the icon, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Disk,
    Ray(usize),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Disk => f.write_str("disk"),
            Element::Ray(index) => write!(f, "ray {index}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("{0} has an empty outline")]
    Empty(Element),

    #[error("{element} has a malformed outline: {source}")]
    Malformed {
        element: Element,
        #[source]
        source: SvgParseError,
    },

    #[error("{0} outline is not closed")]
    Unclosed(Element),

    #[error("{element} extends outside the view box (bounds {bounds:?})")]
    OutOfBounds { element: Element, bounds: Rect },

    /// The outline reaches within `distance` of the disk center, inside the
    /// disk radius.
    #[error("{element} overlaps the disk (closest point {distance:.3} from center)")]
    IntersectsDisk { element: Element, distance: f64 },

    /// The outline encloses the disk center, so its fill paints over the disk.
    #[error("{0} encloses the disk center")]
    CoversDisk(Element),

    #[error("{element} is filled {found:?}, expected {expected:?}")]
    FillMismatch {
        element: Element,
        found: &'static str,
        expected: &'static str,
    },

    #[error("expected {expected} rays, found {found}")]
    RayCount { expected: usize, found: usize },
}

/// A parsed ray outline and its bounding box.
#[derive(Debug, Clone)]
pub struct RayOutline {
    pub path: BezPath,
    pub bounds: Rect,
}

impl RayOutline {
    pub fn center(&self) -> Point {
        self.bounds.center()
    }
}

/// Parses one outline description.
pub fn parse_outline(d: &str) -> Result<BezPath, SvgParseError> {
    BezPath::from_svg(d)
}

fn contains(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 - BOUNDS_EPSILON
        && inner.y0 >= outer.y0 - BOUNDS_EPSILON
        && inner.x1 <= outer.x1 + BOUNDS_EPSILON
        && inner.y1 <= outer.y1 + BOUNDS_EPSILON
}

/// Smallest distance from `center` to any point on the outline, curves and
/// straight edges alike.
fn closest_approach(path: &BezPath, center: Point) -> f64 {
    path.segments()
        .map(|seg| seg.nearest(center, NEAREST_ACCURACY).distance_sq)
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

/// Checks the disk and every ray of `graphic`.
///
/// Every primitive must be filled [`SUN_FILL`]. Per ray, in order: fill,
/// outline is non-empty, parses, is closed, stays inside the view box, no
/// edge reaches into the disk and the outline does not enclose the disk
/// center. The ray
/// count is checked last so the first broken ray is always reported by
/// index.
pub fn validate(graphic: &IconGraphic) -> Result<Vec<RayOutline>, OutlineError> {
    let canvas = graphic.view_box.rect();
    let disk = graphic.disk;
    let disk_bounds = Rect::from_center_size(disk.center(), (disk.r * 2.0, disk.r * 2.0));
    if !contains(canvas, disk_bounds) {
        return Err(OutlineError::OutOfBounds {
            element: Element::Disk,
            bounds: disk_bounds,
        });
    }

    if disk.fill != SUN_FILL {
        return Err(OutlineError::FillMismatch {
            element: Element::Disk,
            found: disk.fill,
            expected: SUN_FILL,
        });
    }

    let mut outlines = Vec::with_capacity(graphic.rays.len());
    for (index, ray) in graphic.rays.iter().enumerate() {
        let element = Element::Ray(index);
        if ray.fill != SUN_FILL {
            return Err(OutlineError::FillMismatch {
                element,
                found: ray.fill,
                expected: SUN_FILL,
            });
        }
        if ray.d.trim().is_empty() {
            return Err(OutlineError::Empty(element));
        }
        let path = parse_outline(ray.d)
            .map_err(|source| OutlineError::Malformed { element, source })?;
        if path.elements().last() != Some(&PathEl::ClosePath) {
            return Err(OutlineError::Unclosed(element));
        }
        let bounds = path.bounding_box();
        if !contains(canvas, bounds) {
            return Err(OutlineError::OutOfBounds { element, bounds });
        }
        let distance = closest_approach(&path, disk.center());
        if distance <= disk.r {
            return Err(OutlineError::IntersectsDisk { element, distance });
        }
        if path.winding(disk.center()) != 0 {
            return Err(OutlineError::CoversDisk(element));
        }
        outlines.push(RayOutline { path, bounds });
    }

    if outlines.len() != RAY_COUNT {
        return Err(OutlineError::RayCount {
            expected: RAY_COUNT,
            found: outlines.len(),
        });
    }

    log::debug!("validated {} ray outlines", outlines.len());
    Ok(outlines)
}
