//! READ command - Read a single note.

use anyhow::Result;
use clap::Args;
use reqwest::Client;
use uuid::Uuid;

use super::{NoteBody, make_request, output};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Note ID to read
    pub id: Uuid,
}

/// Execute the read command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: ReadArgs) -> Result<()> {
    let url = format!("{}/api/notes/{}", base_url, args.id);

    let response: NoteBody = make_request(client.get(&url)).await?;

    output(&response, human)
}
