//! Build-time configuration.
//!
//! Both values are baked into the bundle when it is compiled, so a deployed
//! client never reads its environment at runtime.

use navi::{HistoryMode, RouterConfig, RouterError};

/// URL prefix the app is served under, `RIFT_BASE_URL` at build time.
pub const BASE_URL: &str = match option_env!("RIFT_BASE_URL") {
    Some(base) => base,
    None => "/",
};

/// `web` or `hash`, `RIFT_HISTORY` at build time.
pub const HISTORY_MODE: Option<&str> = option_env!("RIFT_HISTORY");

/// Router configuration for this build.
///
/// # Errors
///
/// [`RouterError::InvalidHistoryMode`] if `RIFT_HISTORY` names an unknown mode.
pub fn router_config() -> Result<RouterConfig, RouterError> {
    let mode = match HISTORY_MODE {
        Some(mode) => mode.parse()?,
        None => HistoryMode::default(),
    };

    Ok(RouterConfig::new(BASE_URL, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_config_uses_build_values() {
        let config = router_config().unwrap();

        assert_eq!(config, RouterConfig::new(BASE_URL, config.mode()));
        if HISTORY_MODE.is_none() {
            assert_eq!(config.mode(), HistoryMode::Web);
        }
    }
}
