#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use lendboard_ui::state::State;

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use lendboard_business::FileStore;

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lendboard",
        native_options,
        Box::new(|_cc| {
            // Slots live under the platform data dir; fall back to a purely
            // in-memory cache when none is available.
            let state = match eframe::storage_dir("Lendboard") {
                Some(dir) => State::with_store(Box::new(FileStore::new(dir))),
                None => State::default(),
            };
            let app = lendboard_ui::LendboardApp::new(state);
            Ok(Box::new(app))
        }),
    )
}

/// Cache store backed by the browser's localStorage.
///
/// `web_sys::Storage` is not `Send`, so the handle is re-acquired on every
/// call instead of being held in the struct.
#[cfg(target_arch = "wasm32")]
mod web_store {
    use lendboard_business::{CacheError, CacheStore};

    pub struct WebStore;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    impl CacheStore for WebStore {
        fn get(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok().flatten()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
            let storage = local_storage()
                .ok_or_else(|| CacheError::Store("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|_| CacheError::Store("localStorage write rejected".to_owned()))
        }

        fn remove(&mut self, key: &str) {
            if let Some(storage) = local_storage() {
                storage.remove_item(key).ok();
            }
        }
    }
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("egui_canvas")
            .expect("Failed to find egui_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("egui_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    let state = State::with_store(Box::new(web_store::WebStore));
                    let app = lendboard_ui::LendboardApp::new(state);
                    Ok(Box::new(app))
                }),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
