// jotform-client/src/folder.rs
use crate::client::JotformClient;
use crate::error::Result;
use crate::http::HttpClient;
use crate::params::{folder_forms_body, owned_pairs};

// Folder IDs are opaque hex handles, not numbers.
impl<C: HttpClient> JotformClient<C> {
    /// Get the forms in a folder and folder details such as color.
    pub async fn get_folder(&self, folder_id: &str) -> Result<Vec<u8>> {
        self.get(&format!("folder/{folder_id}"), &[]).await
    }

    /// Create a folder from properties like name and color.
    pub async fn create_folder(&self, properties: &[(&str, &str)]) -> Result<Vec<u8>> {
        self.post("folder", &owned_pairs(properties)).await
    }

    /// Update folder properties from a raw JSON object.
    pub async fn update_folder(&self, folder_id: &str, properties: Vec<u8>) -> Result<Vec<u8>> {
        self.put(&format!("folder/{folder_id}"), properties).await
    }

    pub async fn delete_folder(&self, folder_id: &str) -> Result<Vec<u8>> {
        self.delete(&format!("folder/{folder_id}")).await
    }

    /// Move a single form into a folder.
    pub async fn add_form_to_folder(&self, folder_id: &str, form_id: &str) -> Result<Vec<u8>> {
        self.add_forms_to_folder(folder_id, &[form_id]).await
    }

    /// Move a set of forms into a folder.
    pub async fn add_forms_to_folder(
        &self,
        folder_id: &str,
        form_ids: &[&str],
    ) -> Result<Vec<u8>> {
        let body = folder_forms_body(form_ids)?;
        self.put(&format!("folder/{folder_id}"), body).await
    }
}
