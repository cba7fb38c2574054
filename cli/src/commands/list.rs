//! LIST command - List notes, newest first.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, NoteBody, format_timestamp, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Page size (default 10, capped at 100 by the server)
    #[arg(long, short = 'n')]
    pub limit: Option<i64>,

    /// Continue after this note id (from a previous page's cursor)
    #[arg(long)]
    pub before: Option<Uuid>,

    /// List one user's notes instead of the global feed
    #[arg(long)]
    pub author: Option<String>,
}

/// Response for the global feed.
#[derive(Debug, Deserialize, Serialize)]
pub struct FeedResponse {
    pub notes: Vec<NoteBody>,
    pub cursor: Option<Uuid>,
    pub has_more: bool,
}

impl HumanReadable for FeedResponse {
    fn print_human(&self) {
        print_notes(&self.notes);
        if self.has_more {
            if let Some(cursor) = self.cursor {
                println!();
                println!("More notes available: --before {}", cursor);
            }
        }
    }
}

/// Response for a user's notes.
#[derive(Debug, Deserialize, Serialize)]
pub struct UserNotesResponse {
    pub notes: Vec<NoteBody>,
}

impl HumanReadable for UserNotesResponse {
    fn print_human(&self) {
        print_notes(&self.notes);
    }
}

fn print_notes(notes: &[NoteBody]) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }
    for note in notes {
        let mut preview: String = note.content.chars().take(60).collect();
        if note.content.chars().count() > 60 {
            preview.push('…');
        }
        let timestamp = format_timestamp(&note.created);
        let favorites = format!("♥{}", note.favorite_count);
        println!(
            "{}  {}  {}  {}",
            note.id,
            timestamp.as_str().dimmed(),
            favorites.as_str().cyan(),
            preview
        );
    }
}

/// Execute the list command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: ListArgs) -> Result<()> {
    if let Some(author) = &args.author {
        let url = format!("{}/api/users/{}/notes", base_url, author);
        let response: UserNotesResponse = make_request(client.get(&url)).await?;
        return output(&response, human);
    }

    let url = format!("{}/api/notes", base_url);
    let mut request = client.get(&url);
    if let Some(limit) = args.limit {
        request = request.query(&[("limit", limit.to_string())]);
    }
    if let Some(before) = args.before {
        request = request.query(&[("before", before.to_string())]);
    }

    let response: FeedResponse = make_request(request).await?;
    output(&response, human)
}
