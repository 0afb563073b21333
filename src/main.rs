use art_tutor::ArtTutorApp;
use art_tutor::backend::BackendClient;
use art_tutor::config::BackendConfig;
use art_tutor::data::read_catalog_embedded;
use eframe::egui;

fn init_logging() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "art_tutor=info".to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filter)
        .init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    let config = BackendConfig::from_env();
    log::info!("using backend at {}", config.base_url);

    let catalog = match read_catalog_embedded() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("embedded catalog is invalid: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Art Tutor",
        options,
        Box::new(move |cc| {
            let app = ArtTutorApp::new(catalog, BackendClient::new(config))
                .with_repaint(cc.egui_ctx.clone());
            Ok(Box::new(app))
        }),
    )
}
