use std::time::SystemTime;

use backend::auth::jwt::mint_access_token;
use backend::auth::password::{hash_password, DEFAULT_COST};
use backend::auth::ADMIN_ROLE;
use backend::config::db::{DbOwner, DbProfile};
use backend::config::RuntimeEnv;
use backend::error::AppError;
use backend::infra::db::connect_db;
use backend::repos::users::{self, UserCreate};
use backend::state::security_config::SecurityConfig;
use clap::{Parser, Subcommand, ValueEnum};
use migration::{migrate, MigrationCommand};
use sea_orm::TransactionTrait;

#[derive(Clone, Copy, ValueEnum)]
enum Migrate {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Migrate> for MigrationCommand {
    fn from(value: Migrate) -> Self {
        match value {
            Migrate::Up => MigrationCommand::Up,
            Migrate::Down => MigrationCommand::Down,
            Migrate::Fresh => MigrationCommand::Fresh,
            Migrate::Reset => MigrationCommand::Reset,
            Migrate::Refresh => MigrationCommand::Refresh,
            Migrate::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    Prod,
    Test,
}

impl From<Env> for DbProfile {
    fn from(value: Env) -> Self {
        match value {
            Env::Prod => DbProfile::Prod,
            Env::Test => DbProfile::Test,
        }
    }
}

#[derive(Parser)]
#[command(name = "portfolio-cli")]
#[command(about = "Portfolio backend administration tool")]
struct Args {
    /// Database to operate on
    #[arg(short, long, value_enum, default_value = "test", global = true)]
    env: Env,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a schema migration command
    Migrate {
        #[arg(value_enum)]
        command: Migrate,
    },
    /// Create a login account
    CreateUser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = ADMIN_ROLE)]
        role: String,
    },
    /// Print a signed 7-day access token
    IssueToken {
        #[arg(long)]
        user_id: String,
        #[arg(long, default_value = ADMIN_ROLE)]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,portfolio_cli=info,sqlx=warn")
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    match args.command {
        Command::Migrate { command } => {
            let conn = connect_db(args.env.into(), DbOwner::Owner).await?;
            migrate(&conn, command.into()).await?;
            conn.close().await?;
        }
        Command::CreateUser {
            username,
            password,
            role,
        } => {
            let username = username.trim().to_string();
            if username.is_empty() || password.is_empty() {
                return Err(AppError::config("username and password must not be empty"));
            }
            let password_hash = hash_password(password, DEFAULT_COST).await?;

            let conn = connect_db(args.env.into(), DbOwner::App).await?;
            let txn = conn.begin().await?;
            let user = users::create_user(&txn, UserCreate::new(username, password_hash, role))
                .await?;
            txn.commit().await?;

            tracing::info!(user_id = %user.id, role = %user.role, "user created");
            println!("{}", user.id);
        }
        Command::IssueToken { user_id, role } => {
            if user_id.trim().is_empty() {
                return Err(AppError::config("user id must not be empty"));
            }
            let security = SecurityConfig::from_env(RuntimeEnv::from_env()?)?;
            let token = mint_access_token(&user_id, &role, SystemTime::now(), &security)?;
            println!("{token}");
        }
    }
    Ok(())
}
