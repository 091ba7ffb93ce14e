mod seeder;

use clap::Parser;
use seeder::{NewLobby, SeedOutcome, seed_lobby};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "seed", about = "Create a waiting lobby for local development")]
struct Args {
    /// Lobby code (stored uppercase)
    #[arg(short, long)]
    code: String,

    /// User id of the lobby host
    #[arg(long)]
    host: String,

    /// Initial settings as a JSON object (optional)
    #[arg(short, long)]
    settings: Option<String>,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Overwrite the lobby if the code is already taken
    #[arg(long)]
    replace: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = match &args.settings {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(raw)?;
            if !value.is_object() {
                return Err("--settings must be a JSON object".into());
            }
            Some(value)
        }
        None => None,
    };

    println!("Connecting to database...");
    let options = SqliteConnectOptions::from_str(&args.database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    // Run migrations to ensure schema exists
    sqlx::migrate!("../../backend/migrations").run(&pool).await?;

    let lobby = NewLobby {
        code: args.code,
        host_uid: args.host,
        settings,
    };

    match seed_lobby(&pool, &lobby, args.replace).await? {
        SeedOutcome::Inserted => println!("Created lobby {}", lobby.code.to_uppercase()),
        SeedOutcome::Replaced => println!("Replaced lobby {}", lobby.code.to_uppercase()),
        SeedOutcome::AlreadyExists => {
            println!(
                "Lobby {} already exists, pass --replace to overwrite",
                lobby.code.to_uppercase()
            );
        }
    }

    Ok(())
}
