// jotform-cli/src/commands/forms.rs
use super::{as_pairs, list_options, parse_key_val};
use crate::config::Config;
use crate::output::{print_payload, reject_unforced};
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Clone, Debug)]
pub enum FormsCommands {
    /// List the account's forms
    List {
        #[arg(short, long)]
        offset: Option<usize>,
        #[arg(short, long)]
        limit: Option<usize>,
        /// JSON filter object, e.g. '{"status:ne":"DELETED"}'
        #[arg(long)]
        filter: Option<String>,
        /// Order results by a form field name
        #[arg(long)]
        order_by: Option<String>,
    },
    /// Get form details
    Get { id: i64 },
    /// List a form's questions
    Questions { id: i64 },
    /// List a form's submissions
    Submissions {
        id: i64,
        #[arg(short, long)]
        offset: Option<usize>,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        order_by: Option<String>,
    },
    /// Submit answers to a form
    Submit {
        id: i64,
        /// Answer as qid=value; `3_first`-style keys address sub-fields
        #[arg(short, long = "answer", value_parser = parse_key_val, required = true)]
        answers: Vec<(String, String)>,
    },
    /// Get form properties, or one property by key
    Properties {
        id: i64,
        #[arg(long)]
        key: Option<String>,
    },
    /// List files uploaded to a form
    Files { id: i64 },
    /// Webhook management
    #[command(subcommand)]
    Webhooks(WebhooksCommands),
    /// List a form's reports
    Reports { id: i64 },
    /// Clone a form
    Clone { id: i64 },
    /// Delete a form
    Delete {
        id: i64,
        /// Confirm destructive operation
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum WebhooksCommands {
    /// List a form's webhooks
    List { id: i64 },
    /// Add a webhook URL to a form
    Create { id: i64, url: String },
    /// Delete a webhook
    Delete {
        id: i64,
        webhook_id: i64,
        #[arg(long)]
        force: bool,
    },
}

pub async fn handle_forms(cmd: FormsCommands) -> Result<()> {
    let config = Config::load()?;
    let client = config.client()?;

    let payload = match cmd {
        FormsCommands::List {
            offset,
            limit,
            filter,
            order_by,
        } => {
            let options = list_options(offset, limit, filter.as_deref(), order_by)?;
            client.get_forms(&options).await?
        }
        FormsCommands::Get { id } => client.get_form(id).await?,
        FormsCommands::Questions { id } => client.get_form_questions(id).await?,
        FormsCommands::Submissions {
            id,
            offset,
            limit,
            filter,
            order_by,
        } => {
            let options = list_options(offset, limit, filter.as_deref(), order_by)?;
            client.get_form_submissions(id, &options).await?
        }
        FormsCommands::Submit { id, answers } => {
            client
                .create_form_submission(id, &as_pairs(&answers))
                .await?
        }
        FormsCommands::Properties { id, key } => match key {
            Some(key) => client.get_form_property(id, &key).await?,
            None => client.get_form_properties(id).await?,
        },
        FormsCommands::Files { id } => client.get_form_files(id).await?,
        FormsCommands::Webhooks(cmd) => match cmd {
            WebhooksCommands::List { id } => client.get_form_webhooks(id).await?,
            WebhooksCommands::Create { id, url } => client.create_form_webhook(id, &url).await?,
            WebhooksCommands::Delete {
                id,
                webhook_id,
                force,
            } => {
                if !force {
                    reject_unforced("delete a webhook");
                }
                client.delete_form_webhook(id, webhook_id).await?
            }
        },
        FormsCommands::Reports { id } => client.get_form_reports(id).await?,
        FormsCommands::Clone { id } => client.clone_form(id).await?,
        FormsCommands::Delete { id, force } => {
            if !force {
                reject_unforced("delete a form");
            }
            client.delete_form(id).await?
        }
    };

    print_payload(&payload)
}
