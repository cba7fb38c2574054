//! Command-line client for the jot note service.
//!
//! Commands:
//! - signup: Register an account and print a credential
//! - signin: Sign in and print a credential
//! - whoami: Show the signed-in user's profile
//! - create: Create a new note
//! - edit: Replace a note's content
//! - delete: Delete a note
//! - favorite: Toggle a favorite on a note
//! - read: Read a single note
//! - list: List the note feed (or one user's notes)
//!
//! Configuration via environment:
//! - JOT_URL: Base URL of the jot server (default: http://localhost:4000)
//! - JOT_TOKEN: Bearer credential from signup/signin

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, edit::EditArgs, favorite::FavoriteArgs, list::ListArgs,
    read::ReadArgs, signin::SigninArgs, signup::SignupArgs,
};

/// jot note service CLI
///
/// Interact with a jot server from the command line. Prints JSON by
/// default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "jot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// jot server URL
    #[arg(
        long,
        env = "JOT_URL",
        default_value = "http://localhost:4000",
        global = true
    )]
    url: String,

    /// Bearer credential for authentication
    #[arg(long, env = "JOT_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Signup(SignupArgs),

    /// Sign in to an existing account
    Signin(SigninArgs),

    /// Show the signed-in user's profile
    Whoami,

    /// Create a new note
    Create(CreateArgs),

    /// Replace a note's content
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Toggle a favorite on a note
    Favorite(FavoriteArgs),

    /// Read a single note
    Read(ReadArgs),

    /// List notes, newest first
    List(ListArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Signup(args) => {
            commands::signup::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Signin(args) => {
            commands::signin::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Whoami => commands::whoami::execute(&client, &cli.url, cli.human).await,
        Commands::Create(args) => {
            commands::create::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Edit(args) => commands::edit::execute(&client, &cli.url, cli.human, args).await,
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Favorite(args) => {
            commands::favorite::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Read(args) => commands::read::execute(&client, &cli.url, cli.human, args).await,
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
