/// Core error type for the relay bot.
///
/// The Telegram adapter maps its transport errors into `Delivery` so the core
/// can treat every failed send the same way (soft failure, never fatal).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("no stored question matches key {key:?}")]
    Lookup { key: String },

    #[error("delivery error: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, Error>;
