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

//! Plain data types for a static vector graphic.
//!
//! Everything here borrows `'static` data so a graphic can live in a
//! `static` item and be rendered without allocating.

use std::fmt;

use kurbo::{Point, Rect};
use serde::Serialize;

/// Logical coordinate window of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.min_x,
            self.min_y,
            self.min_x + self.width,
            self.min_y + self.height,
        )
    }
}

/// Formats as the `viewBox` attribute value, e.g. `0 0 490.667 490.667`.
impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// A filled `<circle>` primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: &'static str,
}

impl Circle {
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

/// A filled `<path>` primitive. `d` is the raw outline description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathShape {
    pub d: &'static str,
    pub fill: &'static str,
}

/// A complete icon: an `<svg>` root holding one circle and a group of paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IconGraphic {
    /// Value of the root `version` attribute.
    pub version: &'static str,
    /// CSS class hook on the root element.
    pub class: &'static str,
    /// Root `x` / `y` offsets, kept verbatim (`"0px"`).
    pub x: &'static str,
    pub y: &'static str,
    pub view_box: ViewBox,
    pub disk: Circle,
    pub rays: &'static [PathShape],
}

impl IconGraphic {
    /// Total number of drawable primitives (the disk plus every ray).
    pub fn primitive_count(&self) -> usize {
        1 + self.rays.len()
    }

    /// Iterates over the fill color of every primitive, disk first.
    pub fn fills(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.disk.fill).chain(self.rays.iter().map(|ray| ray.fill))
    }
}
