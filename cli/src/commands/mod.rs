//! Command implementations and shared helpers.

pub mod create;
pub mod delete;
pub mod edit;
pub mod favorite;
pub mod list;
pub mod read;
pub mod signin;
pub mod signup;
pub mod whoami;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use colored::Colorize;
use reqwest::{Client, RequestBuilder, header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Types that can print themselves for humans.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Build an HTTP client, attaching the bearer credential if present.
pub fn build_client(token: Option<&str>) -> Result<Client> {
    let mut headers = header::HeaderMap::new();

    if let Some(token) = token {
        let value = header::HeaderValue::from_str(&format!("Bearer {}", token))
            .context("JOT_TOKEN contains invalid characters")?;
        headers.insert(header::AUTHORIZATION, value);
    }

    Client::builder()
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")
}

/// Error body returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    code: String,
    message: String,
}

/// Send a request and parse the JSON response, surfacing the server's
/// error code and message on failure.
pub async fn make_request<T: serde::de::DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
    let response = builder.send().await.context("Request failed")?;
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
            bail!("{} ({})", body.error.message, body.error.code);
        }
        bail!("server returned {}: {}", status, text);
    }

    response
        .json::<T>()
        .await
        .context("Failed to parse server response")
}

/// Print a response as JSON or in human-readable form.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Format a timestamp for human output.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

// ============================================================================
// Shared Response Types
// ============================================================================

/// A note as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
pub struct NoteBody {
    pub id: Uuid,
    pub content: String,
    pub author: Uuid,
    pub favorite_count: i32,
    pub favorited_by: Vec<Uuid>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl HumanReadable for NoteBody {
    fn print_human(&self) {
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Author:".cyan(), self.author);
        println!("  {} {}", "Favorites:".cyan(), self.favorite_count);
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created));
        println!("  {} {}", "Updated:".cyan(), format_timestamp(&self.updated));
        println!();
        println!("{}", self.content);
    }
}

/// A credential as returned by signup/signin.
#[derive(Debug, Deserialize, Serialize)]
pub struct CredentialBody {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    pub expires_in_hours: u64,
}

impl HumanReadable for CredentialBody {
    fn print_human(&self) {
        println!("{}", "Signed in!".green().bold());
        println!();
        println!("  {} {}", "User:".cyan(), self.username);
        println!("  {} {}", "User ID:".cyan(), self.user_id);
        println!(
            "  {} {} hours",
            "Credential valid for:".cyan(),
            self.expires_in_hours
        );
        println!();
        println!("Export it for later commands:");
        println!("  export JOT_TOKEN={}", self.token);
    }
}
