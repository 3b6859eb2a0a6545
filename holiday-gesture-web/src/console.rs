//! Browser console logging
//!
//! `console_log!`, `console_warn!` and `console_error!` route to
//! `web_sys::console` on wasm32. Native builds (unit tests) compile them
//! to no-ops, since wasm-bindgen imports panic off-wasm.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_message: &str) {}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::console::log(&format_args!($($t)*).to_string()))
}

macro_rules! console_warn {
    ($($t:tt)*) => ($crate::console::warn(&format_args!($($t)*).to_string()))
}

macro_rules! console_error {
    ($($t:tt)*) => ($crate::console::error(&format_args!($($t)*).to_string()))
}
