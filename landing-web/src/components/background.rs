//! Background Component
//! Soft blurred colour blobs behind the page, placed randomly on mount

use leptos::prelude::*;

use crate::utils::constants::BACKGROUND_BLOB_COUNT;

/// Blob tints, cycled in order.
const TINTS: [&str; 3] = [
    "rgba(239, 68, 68, 0.18)",
    "rgba(251, 146, 60, 0.14)",
    "rgba(148, 163, 184, 0.16)",
];

#[component]
pub fn Background() -> impl IntoView {
    let blobs = (0..BACKGROUND_BLOB_COUNT)
        .map(|i| {
            let left = js_sys::Math::random() * 100.0;
            let top = js_sys::Math::random() * 100.0;
            let size = js_sys::Math::random() * 240.0 + 220.0;
            let delay = js_sys::Math::random() * 6.0;
            let style = blob_style(left, top, size, delay, TINTS[i % TINTS.len()]);
            view! { <div class="bg-blob" style=style></div> }
        })
        .collect_view();

    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-gradient-to-b from-white via-gray-50 to-white"></div>
            {blobs}
        </div>
    }
}

fn blob_style(left: f64, top: f64, size: f64, delay: f64, tint: &str) -> String {
    format!(
        "left: {:.1}%; top: {:.1}%; width: {:.0}px; height: {:.0}px; \
         animation-delay: {:.1}s; background: radial-gradient(circle, {} 0%, transparent 70%);",
        left, top, size, size, delay, tint
    )
}
