//! Error Domain Inspector
//!
//! Prints the identity and code table of every built-in error domain and,
//! on request, escalates one code per domain to show it being caught.
//! Uses `anyhow` for startup errors; configuration failures are
//! `error_kernel::ErrorCode`s of the inspector's own domain.

mod config;
mod domain;
mod report;

use error_kernel::{
    CodeType, CoreErrc, ErrorCode, ErrorDomain, FutureErrc, catch_exception, core_error_domain,
    future_error_domain, install_panic_hook,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{InspectConfig, OutputFormat};
use domain::{InspectErrc, inspect_error_domain};
use report::DomainReport;

/// Built-in domains with their known codes
fn domains() -> Vec<(&'static dyn ErrorDomain, Vec<CodeType>)> {
    vec![
        (
            core_error_domain(),
            CoreErrc::ALL.iter().map(|errc| errc.code()).collect(),
        ),
        (
            future_error_domain(),
            FutureErrc::ALL.iter().map(|errc| errc.code()).collect(),
        ),
        (
            inspect_error_domain(),
            InspectErrc::ALL.iter().map(|errc| errc.code()).collect(),
        ),
    ]
}

fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inspect=info,error_kernel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    install_panic_hook();

    let config = InspectConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let domains = domains();
    let reports: Vec<DomainReport> = domains
        .iter()
        .map(|(domain, codes)| DomainReport::collect(*domain, codes, config.lookup_code))
        .collect();

    let output = match config.format {
        OutputFormat::Text => report::render_text(&reports),
        OutputFormat::Json => report::render_json(&reports)?,
    };
    println!("{}", output.trim_end());

    if config.escalate {
        for (domain, codes) in &domains {
            let Some(&first) = codes.first() else {
                continue;
            };
            let code = ErrorCode::new(first, *domain, 0);
            match catch_exception(|| code.throw_as_exception()).err() {
                None => tracing::error!(domain = domain.name(), "Escalation returned normally"),
                Some(exception) => tracing::info!(
                    domain = exception.error().domain().name(),
                    code = exception.error().value(),
                    text = exception.error().message(),
                    "Caught escalated error code"
                ),
            }
        }
    }

    Ok(())
}
