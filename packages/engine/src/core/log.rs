//! Console logging
//!
//! On wasm32 messages go to the browser console. Native builds (tests,
//! tooling) have no console to talk to, so logging is a no-op there.

#[cfg(target_arch = "wasm32")]
pub fn log_info(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn log_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_info(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_warn(_msg: &str) {}
