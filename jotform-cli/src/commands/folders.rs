// jotform-cli/src/commands/folders.rs
use crate::config::Config;
use crate::output::{print_payload, reject_unforced};
use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Clone, Debug)]
pub enum FoldersCommands {
    /// Get the forms in a folder
    Get { id: String },
    /// Create a folder
    Create {
        name: String,
        /// Folder color, e.g. #FF0000
        #[arg(long)]
        color: Option<String>,
    },
    /// Move forms into a folder
    AddForms {
        id: String,
        #[arg(required = true)]
        form_ids: Vec<String>,
    },
    /// Delete a folder
    Delete {
        id: String,
        #[arg(long)]
        force: bool,
    },
}

pub async fn handle_folders(cmd: FoldersCommands) -> Result<()> {
    let config = Config::load()?;
    let client = config.client()?;

    let payload = match cmd {
        FoldersCommands::Get { id } => client.get_folder(&id).await?,
        FoldersCommands::Create { name, color } => {
            let mut properties = vec![("name", name.as_str())];
            if let Some(color) = &color {
                properties.push(("color", color.as_str()));
            }
            client.create_folder(&properties).await?
        }
        FoldersCommands::AddForms { id, form_ids } => {
            let ids: Vec<&str> = form_ids.iter().map(String::as_str).collect();
            client.add_forms_to_folder(&id, &ids).await?
        }
        FoldersCommands::Delete { id, force } => {
            if !force {
                reject_unforced("delete a folder");
            }
            client.delete_folder(&id).await?
        }
    };

    print_payload(&payload)
}
