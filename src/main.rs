use anyhow::Context;
use raybuilder::{
    app::EditorApp,
    config::EditorConfig,
    logging::{init_logging, LoggingConfig},
};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut config = EditorConfig::default();
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_export_path(path);
    }
    log::info!("Export target: {}", config.export_path.display());

    EditorApp::new(config)
        .context("failed to start the editor")?
        .run()
        .context("editor stopped with an error")?;
    Ok(())
}
