//! Startup language resolution

use awsomeshop_domain::Result;
use awsomeshop_infra::LanguageDetector;
use tracing::debug;

use crate::context::AppContext;

/// Resolve the UI language for this run.
///
/// A stored preference always wins; otherwise the IP-geolocation guess
/// runs and its answer is persisted for the next start. Detection
/// failures quietly fall back to the configured default.
pub async fn init_language(ctx: &AppContext) -> Result<String> {
    if let Some(language) = ctx.store.language() {
        debug!(language, "using stored language preference");
        return Ok(language);
    }

    let detector = LanguageDetector::new(ctx.config.locale.clone())?;
    let language = detector.detect().await;
    ctx.store.set_language(&language);
    debug!(language, "language detected and persisted");
    Ok(language)
}
