#![allow(missing_docs)]

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = rift_app::start() {
            navi::web_sys::console::error_1(&e.to_string().into());
        }
    }
}
