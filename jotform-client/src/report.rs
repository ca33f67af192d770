// jotform-client/src/report.rs
use crate::client::JotformClient;
use crate::error::Result;
use crate::http::HttpClient;

impl<C: HttpClient> JotformClient<C> {
    /// Get report properties like fields and status. Report IDs come from
    /// `/user/reports`.
    pub async fn get_report(&self, report_id: i64) -> Result<Vec<u8>> {
        self.get(&format!("user/report/{report_id}"), &[]).await
    }

    pub async fn delete_report(&self, report_id: i64) -> Result<Vec<u8>> {
        self.delete(&format!("report/{report_id}")).await
    }
}
