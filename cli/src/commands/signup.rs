//! SIGNUP command - Register a new account.

use anyhow::Result;
use clap::Args;
use reqwest::Client;
use serde::Serialize;

use super::{CredentialBody, make_request, output};

/// Arguments for the signup command.
#[derive(Args)]
pub struct SignupArgs {
    /// Username for the new account
    pub username: String,

    /// Email address for the new account
    pub email: String,

    /// Password (at least 8 characters)
    #[arg(long, short = 'p')]
    pub password: String,
}

/// Request body for registration.
#[derive(Serialize)]
struct SignUpRequest {
    username: String,
    email: String,
    password: String,
}

/// Execute the signup command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: SignupArgs) -> Result<()> {
    let url = format!("{}/api/auth/signup", base_url);

    let request_body = SignUpRequest {
        username: args.username,
        email: args.email,
        password: args.password,
    };

    let response: CredentialBody =
        make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
