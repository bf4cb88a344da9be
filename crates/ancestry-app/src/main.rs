//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Ancestry");

    let config = ancestry_app::AppConfig::from_args(std::env::args().skip(1));
    log::info!("Catalog: {}", config.catalog);

    pollster::block_on(ancestry_app::App::run_with_config(config));
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
