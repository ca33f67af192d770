mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    handle_folders, handle_forms, handle_reports, handle_submissions, handle_user, run_setup,
    FoldersCommands, FormsCommands, ReportsCommands, SubmissionsCommands, UserCommands,
};
use output::{print_error, print_payload, print_response, ErrorResponse, ExitCode, Response};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jotform")]
#[command(about = "A command-line interface for the JotForm API", long_about = None)]
struct Cli {
    /// Log request URLs and parameters to stderr
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Form operations
    #[command(subcommand)]
    Forms(FormsCommands),
    /// Submission operations
    #[command(subcommand)]
    Submissions(SubmissionsCommands),
    /// Account operations
    #[command(subcommand)]
    User(UserCommands),
    /// Folder operations
    #[command(subcommand)]
    Folders(FoldersCommands),
    /// Report operations
    #[command(subcommand)]
    Reports(ReportsCommands),
    /// Details of a pricing plan
    Plan {
        /// Plan name: FREE, BRONZE, SILVER, GOLD
        name: String,
    },
    /// Interactive credential setup
    Setup,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(cli).await {
        let error = if e.downcast_ref::<jotform_client::Error>().is_some() {
            ErrorResponse::api_error(format!("{e:#}"))
        } else {
            ErrorResponse::invalid_input(format!("{e:#}"))
        };
        let _ = print_response(&Response::<()>::error(error));
        print_error(&format!("{e:#}"));
        std::process::exit(exit_code_for(&e).code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Forms(cmd) => handle_forms(cmd).await,
        Commands::Submissions(cmd) => handle_submissions(cmd).await,
        Commands::User(cmd) => handle_user(cmd).await,
        Commands::Folders(cmd) => handle_folders(cmd).await,
        Commands::Reports(cmd) => handle_reports(cmd).await,
        Commands::Plan { name } => {
            let client = config::Config::load()?.client()?;
            let payload = client.get_plan(&name).await?;
            print_payload(&payload)
        }
        Commands::Setup => {
            let code = run_setup().await?;
            std::process::exit(code);
        }
    }
}

/// Connection failures and 5xx responses are worth retrying; everything
/// else is not.
fn exit_code_for(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<jotform_client::Error>() {
        Some(jotform_client::Error::Http(http)) => match http.status {
            None => ExitCode::TransientError,
            Some(status) if status >= 500 => ExitCode::TransientError,
            Some(_) => ExitCode::PermanentError,
        },
        _ => ExitCode::PermanentError,
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("jotform_client=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
