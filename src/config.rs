use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{fs, net::SocketAddr, path::Path};

use crate::constants::{DEV_WALLET_BALANCE_MIST, FAUCET_DEFAULT_MIST};

/// Dev node configuration (`grove.toml`). Every field has a default, so an
/// empty file — or no file at all — is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroveConfig {
    /// Address the HTTP API binds to.
    #[serde(default = "default_listen")]
    pub listen: String,
    /// MIST granted per faucet call when the request names no amount.
    #[serde(default = "default_faucet_amount")]
    pub faucet_amount_mist: u64,
    /// Starting balance for the six well-known dev wallets.
    #[serde(default = "default_dev_wallet_balance")]
    pub dev_wallet_balance_mist: u64,
    /// Start from the illustrative mid-round demo snapshot instead of a
    /// pristine round 1.
    #[serde(default)]
    pub seed_demo_state: bool,
}

fn default_listen() -> String {
    "127.0.0.1:8720".to_string()
}

fn default_faucet_amount() -> u64 {
    FAUCET_DEFAULT_MIST
}

fn default_dev_wallet_balance() -> u64 {
    DEV_WALLET_BALANCE_MIST
}

impl Default for GroveConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            faucet_amount_mist: default_faucet_amount(),
            dev_wallet_balance_mist: default_dev_wallet_balance(),
            seed_demo_state: false,
        }
    }
}

impl GroveConfig {
    pub fn validate(&self) -> Result<()> {
        self.listen
            .parse::<SocketAddr>()
            .map_err(|e| anyhow!("listen address '{}' is invalid: {}", self.listen, e))?;
        if self.faucet_amount_mist == 0 {
            return Err(anyhow!("faucet_amount_mist must be nonzero"));
        }
        Ok(())
    }
}

pub fn load_config(path: &str) -> Result<GroveConfig> {
    let raw = fs::read_to_string(Path::new(path))?;
    let cfg: GroveConfig = toml::from_str(&raw)?;
    cfg.validate()?;
    Ok(cfg)
}
