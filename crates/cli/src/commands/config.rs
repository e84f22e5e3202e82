use plalz_core::config::AppConfig;

pub fn run(config: &AppConfig) -> String {
    let catalog = config
        .catalog
        .path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(builtin catalog)".to_string());

    [
        "effective config (source precedence: overrides > env > file > default):".to_string(),
        format!("storage.path = {}", config.storage.path.display()),
        format!("catalog.path = {catalog}"),
        format!("logging.level = {}", config.logging.level),
        format!("logging.format = {:?}", config.logging.format),
    ]
    .join("\n")
}
