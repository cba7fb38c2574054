//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;

use super::{NoteBody, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Content for the new note
    pub content: String,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    content: String,
}

/// Execute the create command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: CreateArgs) -> Result<()> {
    let url = format!("{}/api/notes", base_url);

    let request_body = CreateNoteRequest {
        content: args.content,
    };

    let response: NoteBody = make_request(client.post(&url).json(&request_body)).await?;

    if human {
        println!("{}", "Note created!".green().bold());
        println!();
    }
    output(&response, human)
}
