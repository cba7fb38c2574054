//! EDIT command - Replace a note's content.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;
use uuid::Uuid;

use super::{NoteBody, make_request, output};

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Note ID to edit
    pub id: Uuid,

    /// Replacement content
    pub content: String,
}

/// Request body for updating a note.
#[derive(Serialize)]
struct UpdateNoteRequest {
    content: String,
}

/// Execute the edit command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: EditArgs) -> Result<()> {
    let url = format!("{}/api/notes/{}", base_url, args.id);

    let request_body = UpdateNoteRequest {
        content: args.content,
    };

    let response: NoteBody = make_request(client.put(&url).json(&request_body)).await?;

    if human {
        println!("{}", "Note updated!".green().bold());
        println!();
    }
    output(&response, human)
}
