// jotform-cli/src/commands/reports.rs
use crate::config::Config;
use crate::output::{print_payload, reject_unforced};
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Clone, Debug)]
pub enum ReportsCommands {
    /// Get report properties
    Get { id: i64 },
    /// Create a report on a form
    Create {
        form_id: i64,
        /// Report title
        title: String,
        /// Report kind: csv, excel, grid, table, rss
        #[arg(long, default_value = "grid")]
        list_type: String,
        /// Comma separated field list, e.g. ip,dt,1
        #[arg(long)]
        fields: Option<String>,
    },
    /// Delete a report
    Delete {
        id: i64,
        #[arg(long)]
        force: bool,
    },
}

pub async fn handle_reports(cmd: ReportsCommands) -> Result<()> {
    let config = Config::load()?;
    let client = config.client()?;

    let payload = match cmd {
        ReportsCommands::Get { id } => client.get_report(id).await?,
        ReportsCommands::Create {
            form_id,
            title,
            list_type,
            fields,
        } => {
            let mut report = vec![("title", title.as_str()), ("list_type", list_type.as_str())];
            if let Some(fields) = &fields {
                report.push(("fields", fields.as_str()));
            }
            client.create_report(form_id, &report).await?
        }
        ReportsCommands::Delete { id, force } => {
            if !force {
                reject_unforced("delete a report");
            }
            client.delete_report(id).await?
        }
    };

    print_payload(&payload)
}
