use anyhow::Result;
use reqwest::header::{AUTHORIZATION, USER_AGENT};

use crate::config::Config;

const USER_AGENT_STRING: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

fn task_list_url(team_id: &str, user_id: &str) -> String {
    format!(
        "https://api.clickup.com/api/v2/team/{team_id}/task?assignees[]={user_id}&include_closed=false"
    )
}

/// Performs the single GET request for the user's open tasks and returns the
/// raw response body. ClickUp expects the token verbatim in the
/// Authorization header, without a Bearer prefix.
pub async fn fetch_tasks(client: &reqwest::Client, config: &Config) -> Result<String> {
    let body = client
        .get(task_list_url(&config.team_id, &config.user_id))
        .header(AUTHORIZATION, config.token.as_str())
        .header(USER_AGENT, USER_AGENT_STRING)
        .send()
        .await?
        .text()
        .await?;

    Ok(body)
}
