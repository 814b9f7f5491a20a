//! Browser console logging.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);
}

// No console outside the browser; native builds (and tests) drop messages.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log(_s: &str) {}

macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::logging::log(&format_args!($($t)*).to_string())
    };
}

pub(crate) use console_log;
