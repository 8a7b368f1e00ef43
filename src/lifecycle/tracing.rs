//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. Store actors log
//! with an `entity_type` field, so module paths are hidden (`with_target(false)`).
//!
//! The filter comes from `RUST_LOG` when set, otherwise from
//! [`ShopConfig::log_filter`](crate::config::ShopConfig::log_filter):
//!
//! ```bash
//! RUST_LOG=debug cargo run          # full payloads at every store
//! SHOP__LOG_SPAN_EVENTS=true cargo run
//! ```
//!
//! A placement at `info` reads roughly:
//!
//! ```text
//! INFO Store started entity_type="Order"
//! INFO place_order{member=member_1 lines=1}: Action ok entity_type="StockItem" id=item_1
//! INFO place_order{member=member_1 lines=1}: Order placed order=order_1 total=20000 lines=1
//! INFO Saved entity_type="Order" id=order_1 size=1
//! ```

use crate::config::ShopConfig;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(config: &ShopConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let span_events = if config.log_span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(span_events)
        .with_target(false)
        .compact()
        .init();
}
