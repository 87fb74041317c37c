use std::sync::Arc;

use srb_core::{admins::AdminSet, config::Config, relay::Relay};

#[tokio::main]
async fn main() -> Result<(), srb_core::Error> {
    srb_core::logging::init("srb")?;

    let cfg = Arc::new(Config::load()?);
    let relay = Arc::new(Relay::new(AdminSet::new(cfg.admins.clone())));

    srb_telegram::router::run_polling(cfg, relay)
        .await
        .map_err(|e| srb_core::Error::Delivery(format!("telegram bot failed: {e}")))?;

    Ok(())
}
