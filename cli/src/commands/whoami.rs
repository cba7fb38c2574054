//! WHOAMI command - Show the signed-in user's profile.

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// The signed-in user's profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProfileBody {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub created: DateTime<Utc>,
}

impl HumanReadable for ProfileBody {
    fn print_human(&self) {
        println!("  {} {}", "User:".cyan(), self.username);
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Email:".cyan(), self.email);
        println!("  {} {}", "Avatar:".cyan(), self.avatar);
        println!("  {} {}", "Since:".cyan(), format_timestamp(&self.created));
    }
}

/// Execute the whoami command.
pub async fn execute(client: &Client, base_url: &str, human: bool) -> Result<()> {
    let url = format!("{}/api/auth/me", base_url);

    let response: ProfileBody = make_request(client.get(&url)).await?;

    output(&response, human)
}
