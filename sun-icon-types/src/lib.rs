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

//! Framework-independent description of the sun icon.
//!
//! The geometry in [`sun`] is the single source of truth for every
//! coordinate. The Dioxus and Yew components render it as-is, [`markup`]
//! writes it out as a standalone SVG document, and [`outline`] checks that
//! the ray outlines are well formed.

pub mod geometry;
pub mod markup;
pub mod outline;
pub mod sun;

pub use geometry::{Circle, IconGraphic, PathShape, ViewBox};
pub use outline::{OutlineError, RayOutline};
pub use sun::{sun_icon, RAY_COUNT, SUN, SUN_CLASS, SUN_FILL};

/// Default SVG namespace.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// XLink namespace, declared on the root for compatibility with older tooling.
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
