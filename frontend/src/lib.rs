use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: installs the panic hook and console logger, then
/// mounts the site.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("console logger already installed");
    }

    leptos::mount::mount_to_body(App);
}
