mod bootstrap;

use anyhow::{Context, Result};
use market_core::session::{SessionContext, SessionStore};
use market_core::settings::Settings;
use market_data::Catalog;
use market_runtime::{FlowTimings, Scheduler};
use market_ui::app::App;
use market_ui::pages::Page;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    let app_dir = bootstrap::ensure_directories()?;
    let log_path = bootstrap::log_path(&app_dir, settings.log_file.as_ref());
    bootstrap::setup_logging(&settings.log_level, &log_path)?;

    tracing::info!("LuxeMarket v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Page: {}, Theme: {}, Log: {}",
        settings.page,
        settings.theme,
        log_path.display()
    );

    let catalog = match &settings.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?
            .leak(),
        None => Catalog::builtin(),
    };
    tracing::info!(
        products = catalog.products().len(),
        posts = catalog.blog_posts().len(),
        "catalog ready"
    );

    let session = SessionContext::establish(SessionStore::with_theme(settings.starts_dark()));
    let (scheduler, rx) = Scheduler::new(FlowTimings {
        payment: settings.checkout_delay(),
        contact_delivery: settings.contact_delay(),
        contact_reset: settings.contact_reset(),
    });

    let app = App::new(session, catalog, scheduler, Page::from_name(&settings.page))?;

    // The loop exits on 'q' / Ctrl+C inside the TUI. We also listen for
    // Ctrl+C at the OS level for signals that arrive outside raw mode.
    tokio::select! {
        result = app.run(rx) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down");
        }
    }

    Ok(())
}
