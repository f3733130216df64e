//! Curtain WASM - Browser Playback Widget
//!
//! Mounts a full-viewport video with a one-time start overlay and a
//! control bar (play/pause, seek, volume, fullscreen). All decisions are
//! made by `curtain-core`; this crate binds them to the DOM.
//!
//! ## Usage
//!
//! ```javascript
//! import init, { CurtainPlayer } from '@curtain/wasm';
//!
//! await init();
//! const player = new CurtainPlayer({ initial_volume: 0.5 });
//! player.mount('app');
//! // later
//! player.unmount();
//! ```

use wasm_bindgen::prelude::*;

mod dom;
mod listener;
mod logging;
mod platform;
mod player;

pub use listener::EventListener;
pub use platform::{WebDocument, WebMedia};
pub use player::CurtainPlayer;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);
    tracing::info!(version = curtain_core::VERSION, "Curtain WASM initialized");
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
