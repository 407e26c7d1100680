// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for yew-ui component tests.
//
// Provides mount/cleanup helpers so that individual test files stay focused
// on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Collect every element under `root` matching `selector`.
pub fn query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Structural fingerprint of `element`: tag names and sorted attributes,
/// children in document order.
pub fn describe(element: &web_sys::Element) -> String {
    let mut names: Vec<String> = element
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .collect();
    names.sort();

    let mut out = element.tag_name();
    for name in names {
        let value = element.get_attribute(&name).unwrap_or_default();
        out.push_str(&format!(" {name}={value:?}"));
    }
    out.push('(');
    let children = element.children();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            out.push_str(&describe(&child));
        }
    }
    out.push(')');
    out
}
