//! SIGNIN command - Sign in to an existing account.

use anyhow::{Result, bail};
use clap::Args;
use reqwest::Client;
use serde::Serialize;

use super::{CredentialBody, make_request, output};

/// Arguments for the signin command.
#[derive(Args)]
pub struct SigninArgs {
    /// Username to sign in with
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Email to sign in with
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Password
    #[arg(long, short = 'p')]
    pub password: String,
}

/// Request body for sign-in.
#[derive(Serialize)]
struct SignInRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    password: String,
}

/// Execute the signin command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: SigninArgs) -> Result<()> {
    if args.username.is_none() && args.email.is_none() {
        bail!("pass --username or --email");
    }

    let url = format!("{}/api/auth/signin", base_url);

    let request_body = SignInRequest {
        username: args.username,
        email: args.email,
        password: args.password,
    };

    let response: CredentialBody =
        make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
