//! FAVORITE command - Toggle a favorite on a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use uuid::Uuid;

use super::{NoteBody, make_request, output};

/// Arguments for the favorite command.
#[derive(Args)]
pub struct FavoriteArgs {
    /// Note ID to toggle
    pub id: Uuid,
}

/// Execute the favorite command.
pub async fn execute(
    client: &Client,
    base_url: &str,
    human: bool,
    args: FavoriteArgs,
) -> Result<()> {
    let url = format!("{}/api/notes/{}/favorite", base_url, args.id);

    let response: NoteBody = make_request(client.post(&url)).await?;

    if human {
        println!(
            "{} The note now has {} favorite(s).",
            "Toggled!".green().bold(),
            response.favorite_count
        );
        println!();
    }
    output(&response, human)
}
