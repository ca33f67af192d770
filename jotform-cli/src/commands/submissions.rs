// jotform-cli/src/commands/submissions.rs
use super::{as_pairs, parse_key_val};
use crate::config::Config;
use crate::output::{print_payload, reject_unforced};
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Clone, Debug)]
pub enum SubmissionsCommands {
    /// Get a submission's information and answers
    Get { id: i64 },
    /// Edit a submission's answers
    Edit {
        id: i64,
        /// Answer as qid=value; `3_first`-style keys address sub-fields
        #[arg(short, long = "answer", value_parser = parse_key_val, required = true)]
        answers: Vec<(String, String)>,
    },
    /// Delete a submission
    Delete {
        id: i64,
        #[arg(long)]
        force: bool,
    },
}

pub async fn handle_submissions(cmd: SubmissionsCommands) -> Result<()> {
    let config = Config::load()?;
    let client = config.client()?;

    let payload = match cmd {
        SubmissionsCommands::Get { id } => client.get_submission(id).await?,
        SubmissionsCommands::Edit { id, answers } => {
            client.edit_submission(id, &as_pairs(&answers)).await?
        }
        SubmissionsCommands::Delete { id, force } => {
            if !force {
                reject_unforced("delete a submission");
            }
            client.delete_submission(id).await?
        }
    };

    print_payload(&payload)
}
