//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Returns the register configuration for the front end.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_serializes() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();
        assert_eq!(json["currencySymbol"], "$");
        assert_eq!(json["maxCartLines"], 100);
    }
}
