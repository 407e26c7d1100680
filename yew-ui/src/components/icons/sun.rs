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

use sun_icon_types::{sun_icon, SVG_NS};
use yew::prelude::*;

/// Sun glyph: a yellow disk ringed by twelve rays.
#[function_component(SunIcon)]
pub fn sun_icon_component() -> Html {
    let graphic = sun_icon();
    let disk = graphic.disk;

    html! {
        <svg
            version={graphic.version}
            class={graphic.class}
            xmlns={SVG_NS}
            x={graphic.x}
            y={graphic.y}
            viewBox={graphic.view_box.to_string()}
        >
            <circle
                cx={disk.cx.to_string()}
                cy={disk.cy.to_string()}
                r={disk.r.to_string()}
                fill={disk.fill}
            />
            <g>
                { for graphic.rays.iter().map(|ray| html! {
                    <path d={ray.d} fill={ray.fill} />
                }) }
            </g>
        </svg>
    }
}
