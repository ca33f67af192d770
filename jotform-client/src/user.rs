// jotform-client/src/user.rs
use crate::client::JotformClient;
use crate::error::Result;
use crate::http::HttpClient;
use crate::params::{form_definition_form, owned_pairs, HistoryQuery, ListOptions};
use serde_json::Value;

impl<C: HttpClient> JotformClient<C> {
    /// Get account details: account type, avatar URL, name, email, website
    /// URL and account limits.
    pub async fn get_user(&self) -> Result<Vec<u8>> {
        self.get("user", &[]).await
    }

    /// Get the number of submissions received this month, plus SSL and
    /// payment submission counts and upload space used.
    pub async fn get_usage(&self) -> Result<Vec<u8>> {
        self.get("user/usage", &[]).await
    }

    /// List the account's forms: title, creation date, new and total
    /// submission counts.
    pub async fn get_forms(&self, options: &ListOptions) -> Result<Vec<u8>> {
        self.get("user/forms", &options.to_query()).await
    }

    /// List the account's submissions across all forms.
    pub async fn get_submissions(&self, options: &ListOptions) -> Result<Vec<u8>> {
        self.get("user/submissions", &options.to_query()).await
    }

    /// List sub users with their form and folder access privileges.
    pub async fn get_subusers(&self) -> Result<Vec<u8>> {
        self.get("user/subusers", &[]).await
    }

    /// List the account's form folders.
    pub async fn get_folders(&self) -> Result<Vec<u8>> {
        self.get("user/folders", &[]).await
    }

    /// List report URLs for the account: Excel, CSV, printable charts,
    /// embeddable HTML tables.
    pub async fn get_reports(&self) -> Result<Vec<u8>> {
        self.get("user/reports", &[]).await
    }

    /// Get account settings: time zone and language.
    pub async fn get_settings(&self) -> Result<Vec<u8>> {
        self.get("user/settings", &[]).await
    }

    /// Update account settings by setting key.
    pub async fn update_settings(&self, settings: &[(&str, &str)]) -> Result<Vec<u8>> {
        self.post("user/settings", &owned_pairs(settings)).await
    }

    /// Get the account activity log: forms created/modified/deleted, logins
    /// and other operations.
    pub async fn get_history(&self, query: &HistoryQuery) -> Result<Vec<u8>> {
        self.get("user/history", &query.to_query()).await
    }

    /// Register a new account from username, password and email.
    pub async fn register_user(&self, details: &[(&str, &str)]) -> Result<Vec<u8>> {
        self.post("user/register", &owned_pairs(details)).await
    }

    /// Log in with username, password, application name and access type.
    pub async fn login_user(&self, credentials: &[(&str, &str)]) -> Result<Vec<u8>> {
        self.post("user/login", &owned_pairs(credentials)).await
    }

    pub async fn logout_user(&self) -> Result<Vec<u8>> {
        self.get("user/logout", &[]).await
    }

    /// Create a form from a nested definition of questions, properties and
    /// emails. See [`crate::params::form_definition_form`] for the flattened
    /// wire shape.
    pub async fn create_form(&self, definition: &serde_json::Map<String, Value>) -> Result<Vec<u8>> {
        self.post("user/forms", &form_definition_form(definition))
            .await
    }

    /// Create forms from a raw JSON definition.
    pub async fn create_forms(&self, forms: Vec<u8>) -> Result<Vec<u8>> {
        self.put("user/forms", forms).await
    }
}
