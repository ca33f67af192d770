// jotform-cli/src/commands/user.rs
use super::list_options;
use crate::config::Config;
use crate::output::print_payload;
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use jotform_client::HistoryQuery;

#[derive(Subcommand, Clone, Debug)]
pub enum UserCommands {
    /// Account details and limits
    Info,
    /// Submission counts and upload space used this month
    Usage,
    /// Account settings (time zone, language)
    Settings,
    /// Sub users and their access privileges
    Subusers,
    /// Form folders
    Folders,
    /// Report URLs for the account
    Reports,
    /// Submissions across all forms
    Submissions {
        #[arg(short, long)]
        offset: Option<usize>,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        order_by: Option<String>,
    },
    /// Account activity log
    History {
        /// Activity kind, e.g. userCreation, formCreation. Default is all.
        #[arg(long)]
        action: Option<String>,
        /// Named range: lastWeek, lastMonth, last3Months, ...
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        sort_by: Option<String>,
        /// Lower bound, MM/DD/YYYY
        #[arg(long)]
        start_date: Option<String>,
        /// Upper bound, MM/DD/YYYY
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Invalidate the session on the service side
    Logout,
}

pub async fn handle_user(cmd: UserCommands) -> Result<()> {
    let config = Config::load()?;
    let client = config.client()?;

    let payload = match cmd {
        UserCommands::Info => client.get_user().await?,
        UserCommands::Usage => client.get_usage().await?,
        UserCommands::Settings => client.get_settings().await?,
        UserCommands::Subusers => client.get_subusers().await?,
        UserCommands::Folders => client.get_folders().await?,
        UserCommands::Reports => client.get_reports().await?,
        UserCommands::Submissions {
            offset,
            limit,
            filter,
            order_by,
        } => {
            let options = list_options(offset, limit, filter.as_deref(), order_by)?;
            client.get_submissions(&options).await?
        }
        UserCommands::History {
            action,
            date,
            sort_by,
            start_date,
            end_date,
        } => {
            validate_history_date(start_date.as_deref())?;
            validate_history_date(end_date.as_deref())?;
            let query = HistoryQuery {
                action,
                date,
                sort_by,
                start_date,
                end_date,
            };
            client.get_history(&query).await?
        }
        UserCommands::Logout => client.logout_user().await?,
    };

    print_payload(&payload)
}

/// The service expects MM/DD/YYYY bounds; reject anything else before the
/// request goes out.
fn validate_history_date(date: Option<&str>) -> Result<()> {
    if let Some(date) = date {
        if NaiveDate::parse_from_str(date, "%m/%d/%Y").is_err() {
            bail!("Invalid date '{}', expected MM/DD/YYYY", date);
        }
    }
    Ok(())
}
