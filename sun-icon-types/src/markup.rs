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

//! Standalone SVG markup for an [`IconGraphic`].
//!
//! The DOM components never go through this module; it exists for golden
//! tests and for hosts that want the icon as a file.

use std::fmt;

use crate::geometry::{Circle, IconGraphic, PathShape};
use crate::{SVG_NS, XLINK_NS};

const INDENT: &str = "  ";

/// Writes `value` with the characters that are significant inside a
/// double-quoted XML attribute escaped.
struct Attr<'a>(&'a str);

impl fmt::Display for Attr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"']) {
            f.write_str(&rest[..pos])?;
            f.write_str(match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            })?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

fn write_circle(f: &mut fmt::Formatter<'_>, depth: usize, circle: &Circle) -> fmt::Result {
    writeln!(
        f,
        r#"{}<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        INDENT.repeat(depth),
        circle.cx,
        circle.cy,
        circle.r,
        Attr(circle.fill)
    )
}

fn write_path(f: &mut fmt::Formatter<'_>, depth: usize, path: &PathShape) -> fmt::Result {
    writeln!(
        f,
        r#"{}<path d="{}" fill="{}"/>"#,
        INDENT.repeat(depth),
        Attr(path.d),
        Attr(path.fill)
    )
}

/// One element per line, two-space indentation, every line terminated with
/// `\n`.
impl fmt::Display for IconGraphic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg version="{}" class="{}" xmlns="{SVG_NS}" xmlns:xlink="{XLINK_NS}" x="{}" y="{}" viewBox="{}" xml:space="preserve">"#,
            Attr(self.version),
            Attr(self.class),
            Attr(self.x),
            Attr(self.y),
            self.view_box
        )?;
        write_circle(f, 1, &self.disk)?;
        writeln!(f, "{INDENT}<g>")?;
        for ray in self.rays {
            write_path(f, 2, ray)?;
        }
        writeln!(f, "{INDENT}</g>")?;
        writeln!(f, "</svg>")
    }
}

impl IconGraphic {
    /// Serializes the graphic as a standalone SVG document.
    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}
