#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Traffix frontend: initializing runtime config");

    wasm_bindgen_futures::spawn_local(async {
        traffix_frontend::config::init().await;
        log::info!("Runtime config initialized");
        traffix_frontend::router::mount_app();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The app only mounts in the browser; native builds exist for `cargo test`.
}
