// src/journal.rs
//
// Journal (tracing) — natif seulement.
// - RUST_LOG prioritaire, sinon `niveau_log` des réglages
// - Appel multiple sans effet (seul le premier compte)

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

pub fn init(niveau_defaut: &str) {
    INIT.call_once(|| {
        let filtre = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(niveau_defaut).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let couche = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_filter(filtre);

        tracing_subscriber::registry().with(couche).init();
    });
}
