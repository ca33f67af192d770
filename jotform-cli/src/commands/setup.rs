// jotform-cli/src/commands/setup.rs
use crate::config::Config;
use crate::output::print_success;
use anyhow::Result;
use dialoguer::Password;

/// Exit code type
pub type SetupExitCode = i32;

/// Run the interactive setup command
pub async fn run_setup() -> Result<SetupExitCode> {
    println!("JotForm CLI Setup");
    println!();

    let api_key = Password::new()
        .with_prompt("Enter your JotForm API key")
        .interact()?;

    if api_key.is_empty() {
        eprintln!("Error: API key cannot be empty");
        return Ok(2);
    }

    println!();
    println!("Validating credentials...");

    let config = Config {
        api_key,
        ..Config::load().unwrap_or_default()
    };

    // Validate the key with the cheapest authenticated call
    match config.client()?.get_user().await {
        Ok(_) => {
            config.save()?;

            println!();
            print_success("Credentials saved!");
            println!();
            println!("Try: jotform forms list");

            Ok(0)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Visit https://www.jotform.com/myaccount/api to create an API key.");
            Ok(2)
        }
    }
}
