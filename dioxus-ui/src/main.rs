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
use sun_icon_dioxus::SunIcon;
use sun_icon_types::{outline, sun_icon};

/// App root component
#[component]
fn App() -> Element {
    rsx! {
        div { class: "sun-icon-demo",
            SunIcon {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    match outline::validate(sun_icon()) {
        Ok(rays) => log::info!("sun icon geometry ok ({} rays)", rays.len()),
        Err(e) => log::error!("sun icon geometry is invalid: {e}"),
    }

    dioxus::launch(App);
}
