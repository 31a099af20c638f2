//! # Delegate Check
//!
//! Verifies that the active delegate factory can produce every delegate
//! kind, then builds an API context from the configured settings.
//!
//! Exits non-zero if the factory is not conforming.

use anyhow::Result;
use tracing::{error, info, warn};

use chat_client::application::conformance;
use chat_client::config::Settings;
use chat_client::startup;

fn main() -> Result<()> {
    // Settings come first; they carry the default log filter
    let settings = Settings::load()?;
    chat_client::telemetry::init_tracing(&settings.telemetry.log_filter);

    info!(environment = %settings.environment, "Starting delegate check");

    let factory = startup::default_factory();
    let report = conformance::probe(factory.as_ref())?;

    for (kind, failure) in report.failures() {
        error!(kind = %kind, error = %failure, "Delegate kind failed");
    }
    info!(
        factory = report.factory_name(),
        supported = report.supported().len(),
        unsupported = report.unsupported().len(),
        mismatched = report.mismatched().len(),
        "Conformance report"
    );

    if !report.is_conforming() {
        error!(factory = report.factory_name(), "Factory is not conforming");
        std::process::exit(1);
    }

    if settings.api.has_token() {
        startup::build_context(&settings, factory)?;
    } else {
        warn!("No API token configured, skipping context check");
    }

    info!("Delegate check passed");
    Ok(())
}
