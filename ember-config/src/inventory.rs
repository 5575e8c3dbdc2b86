use serde::{Deserialize, Serialize};

/// Limits applied to inventory transactions sent by clients.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InventoryConfig {
    /// Transactions announcing more actions than this are rejected and the client is kicked.
    pub max_transaction_actions: usize,
    /// Log every decoded transaction at debug level.
    pub log_transactions: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            max_transaction_actions: Self::DEFAULT_MAX_TRANSACTION_ACTIONS,
            log_transactions: false,
        }
    }
}

impl InventoryConfig {
    pub const DEFAULT_MAX_TRANSACTION_ACTIONS: usize = 512;

    pub fn validate(&self) -> Result<(), String> {
        if self.max_transaction_actions == 0 {
            return Err("inventory.max_transaction_actions must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InventoryConfig::default();
        assert_eq!(config.max_transaction_actions, 512);
        assert!(!config.log_transactions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_actions_is_invalid() {
        let config = InventoryConfig {
            max_transaction_actions: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
