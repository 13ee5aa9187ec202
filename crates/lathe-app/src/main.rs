mod cli;
mod config;

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lathe_common::TabId;
use lathe_shell::{GeometrySource, LayoutRect, ShellSession};

/// Stand-in region for the navigation bar strip; a real embedding wires
/// the web view's layout measurements in here instead.
struct NavbarRegion;

impl GeometrySource for NavbarRegion {
    fn measure(&self) -> Option<LayoutRect> {
        Some(LayoutRect::new(0.0, 0.0, 1280.0, 48.0))
    }
}

fn main() {
    let args = cli::parse();

    let (app_config, config_err) = match config::load(args.config.as_deref().map(Path::new)) {
        Ok(c) => (c, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .as_deref()
        .unwrap_or(&app_config.log_level)
        .to_string();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "lathe=info".parse().unwrap()),
            ),
        )
        .init();

    info!("Lathe shell v{} starting (standalone)", env!("CARGO_PKG_VERSION"));
    if let Some(err) = config_err {
        warn!("config load failed, using defaults: {err}");
    }

    // One cooperative thread: pending bridge calls are just parked
    // futures, never blocked threads.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    runtime.block_on(run(args, app_config));
    info!("standalone session complete");
}

async fn run(args: cli::Args, app_config: config::AppConfig) {
    let session = ShellSession::standalone();

    if app_config.pull_state_on_start {
        session.pull_initial_state().await;
    }

    let mut observer = session.observe_hole("navbar", Arc::new(NavbarRegion)).await;
    observer.refresh().await;

    if let Some(raw) = args.tab.as_deref().or(app_config.start_tab.as_deref()) {
        match raw.parse::<TabId>() {
            Ok(id) => session.select_tab(id).await,
            Err(err) => warn!("start tab ignored: {err}"),
        }
    }

    {
        let navigation = session.navigation().lock().unwrap();
        info!(
            active = %navigation.active_tab(),
            visible = navigation.visible_tabs().len(),
            "navigation ready"
        );
    }
    {
        let registry = session.registry().lock().unwrap();
        for id in registry.ids() {
            if let Some(bounds) = registry.get(&id) {
                info!(hole = %id, bounds = %bounds, "hole region");
            }
        }
    }

    observer.detach();
}
