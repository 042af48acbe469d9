use anyhow::{anyhow, Result};
use std::env;

/// Credentials and ids read from the environment. No validation beyond
/// presence; a malformed id surfaces as an API error instead.
pub struct Config {
    pub token: String,
    pub user_id: String,
    pub team_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            token: require("CLICKUP_TOKEN")?,
            user_id: require("CLICKUP_USERID")?,
            team_id: require("CLICKUP_TEAMID")?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| {
        anyhow!(
            "{name} is not set. Please set the CLICKUP_TOKEN, CLICKUP_USERID, \
             and CLICKUP_TEAMID environment variables."
        )
    })
}
