//! Stock script input: the initial record plus the commands to apply.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use stockroom_inventory::{CreateStockRecord, StockCommand};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockScript {
    pub record: CreateStockRecord,
    #[serde(default)]
    pub commands: Vec<StockCommand>,
}

impl StockScript {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid stock script")
    }
}

/// Load a script from `path`, or from stdin when no path is given.
pub fn load_script(path: Option<&Path>) -> anyhow::Result<StockScript> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read stock script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stock script from stdin")?;
            buf
        }
    };
    StockScript::from_json(&json)
}
