// jotform-client/src/system.rs
use crate::client::JotformClient;
use crate::error::Result;
use crate::http::HttpClient;

impl<C: HttpClient> JotformClient<C> {
    /// Get details of a pricing plan. `FREE`, `PREMIUM` etc.
    pub async fn get_plan(&self, plan_name: &str) -> Result<Vec<u8>> {
        self.get(&format!("system/plan/{plan_name}"), &[]).await
    }
}
