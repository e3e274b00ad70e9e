//! Sonaverse CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! sonaverse-cli migrate
//!
//! # Create the protected super-admin account
//! sonaverse-cli admin create -e ceo@sonaverse.kr -n "대표 관리자" -r super_admin \
//!     -p <password> --protected
//!
//! # Create a regular admin
//! sonaverse-cli admin create -e editor@sonaverse.kr -n "편집자" -r admin -p <password>
//!
//! # Seed sample bilingual content
//! sonaverse-cli seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `admin create` - Create admin users
//! - `seed` - Seed sample content

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sonaverse-cli")]
#[command(author, version, about = "Sonaverse CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the database with sample content
    Seed,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin role (`super_admin`, `admin`, `viewer`)
        #[arg(short, long, default_value = "admin")]
        role: String,

        /// Initial password (min 8 characters)
        #[arg(short, long)]
        password: String,

        /// Mark the account as protected (undeletable super admin)
        #[arg(long)]
        protected: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                role,
                password,
                protected,
            } => {
                commands::admin::create_user(&email, &name, &role, &password, protected).await?;
            }
        },
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
