// SPDX-License-Identifier: MIT OR Apache-2.0

//! dioxus-ui library root.
//!
//! Re-exports the icon components so that integration tests (under `tests/`)
//! and host applications can import them. The demo entry-point lives in
//! `main.rs`.

pub mod components;

pub use components::icons::sun::SunIcon;
