pub mod content;
pub mod frontend;
pub mod motion;
pub mod scatter;
pub mod theme;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
