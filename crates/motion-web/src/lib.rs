#![cfg(target_arch = "wasm32")]

pub mod applier;
pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod scene;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scene = scene::build(&document)?;
    // page-lifetime scene: the frame loop and listeners live until unload
    let scene = Box::leak(Box::new(scene));
    scene.start();
    Ok(())
}
