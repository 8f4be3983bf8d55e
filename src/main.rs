//! Clinic administration
//!
//! Main entry point: REST server, admin console and maintenance commands.

use std::fs::File;
use std::io::BufRead;
use std::path::PathBuf;

use actix_web::{web, App, HttpServer};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_actix_web::TracingLogger;

use clinic::client::ClinicClient;
use clinic::config::{self, Config};
use clinic::db::{import, Database};
use clinic::models::NewUser;
use clinic::ui::console::Console;
use clinic::ui::router::Router;
use clinic::{api, security, telemetry};

#[derive(Parser)]
#[command(name = "clinic", about = "Clinic administration service and console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST server
    Serve,
    /// Run the admin console against a running server
    Console {
        #[arg(long)]
        base_url: Option<String>,
        #[arg(long)]
        doctor_id: Option<i64>,
    },
    /// Import patients from a CSV file (name,dob,address,phone,email)
    Migrate { csv: PathBuf },
    /// Manage staff accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a user; the password is read from stdin when not given
    Add {
        username: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        password: Option<String>,
    },
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = config::load_config().context("failed to load configuration")?;
    telemetry::init(&config.log);

    match cli.command {
        Commands::Serve => serve(config).await,
        Commands::Console { base_url, doctor_id } => console(config, base_url, doctor_id).await,
        Commands::Migrate { csv } => migrate(&config, csv).await,
        Commands::User {
            command: UserCommands::Add { username, role, password },
        } => add_user(&config, username, role, password).await,
    }
}

async fn open_database(config: &Config) -> Result<Database> {
    let database = Database::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    database
        .run_migrations()
        .await
        .context("failed to run database migrations")?;
    Ok(database)
}

async fn serve(config: Config) -> Result<()> {
    let database = open_database(&config).await?;
    let address = (config.server.host.clone(), config.server.port);
    info!("Listening on {}:{}", address.0, address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(database.clone()))
            .wrap(api::middleware::cors())
            .wrap(TracingLogger::default())
            .configure(api::configure)
    })
    .bind(address)?
    .run()
    .await?;
    Ok(())
}

async fn console(mut config: Config, base_url: Option<String>, doctor_id: Option<i64>) -> Result<()> {
    if let Some(base_url) = base_url {
        config.client.base_url = base_url;
    }
    if let Some(doctor_id) = doctor_id {
        config.client.doctor_id = doctor_id;
    }
    let client = ClinicClient::from_config(&config.client)?;
    let router = Router::new(client, config.client.doctor_id);
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    Console::new(router, input, tokio::io::stdout()).run().await?;
    Ok(())
}

async fn migrate(config: &Config, csv: PathBuf) -> Result<()> {
    let file = File::open(&csv).with_context(|| format!("failed to open {}", csv.display()))?;
    let database = open_database(config).await?;
    let count = import::import_patients(&database, file).await?;
    println!("Imported {} patients from {}", count, csv.display());
    Ok(())
}

async fn add_user(config: &Config, username: String, role: String, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let database = open_database(config).await?;
    let user = NewUser {
        username,
        password_hash: security::hash_password(&password)?,
        role,
    };
    let id = database
        .create_user(&user)
        .await
        .with_context(|| format!("failed to create user {}", user.username))?;
    println!("Created {} '{}' with id {}", user.role, user.username, id);
    Ok(())
}

fn read_password() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
