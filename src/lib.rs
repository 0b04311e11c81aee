//! Segers Site - behavior layer of the Advocatenkantoor Segers website
//!
//! Navbar scroll styling, the mobile menu, smooth anchor scrolling, reveal and counter
//! animations, and the contact form with its toast notifications, compiled to
//! WebAssembly and attached to the static pages.

pub mod core;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod ui;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::run();
}
