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

use dioxus::prelude::*;
use sun_icon_types::{sun_icon, SVG_NS};

/// Sun glyph: a yellow disk ringed by twelve rays.
#[component]
pub fn SunIcon() -> Element {
    let graphic = sun_icon();
    let disk = graphic.disk;
    let view_box = graphic.view_box;

    rsx! {
        svg {
            "version": graphic.version,
            class: graphic.class,
            xmlns: SVG_NS,
            x: graphic.x,
            y: graphic.y,
            view_box: "{view_box}",
            circle {
                cx: "{disk.cx}",
                cy: "{disk.cy}",
                r: "{disk.r}",
                fill: disk.fill,
            }
            g {
                for (index, ray) in graphic.rays.iter().enumerate() {
                    path { key: "{index}", d: ray.d, fill: ray.fill }
                }
            }
        }
    }
}
