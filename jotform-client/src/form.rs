// jotform-client/src/form.rs
use crate::client::JotformClient;
use crate::error::Result;
use crate::http::HttpClient;
use crate::params::{owned_pairs, prefixed_form, submission_form, ListOptions};

impl<C: HttpClient> JotformClient<C> {
    /// Get form details: status, update and creation dates, submission
    /// count. Form IDs are the numbers in a form URL.
    pub async fn get_form(&self, form_id: i64) -> Result<Vec<u8>> {
        self.get(&format!("form/{form_id}"), &[]).await
    }

    /// List all questions on a form.
    pub async fn get_form_questions(&self, form_id: i64) -> Result<Vec<u8>> {
        self.get(&format!("form/{form_id}/questions"), &[]).await
    }

    /// Get a single question's properties, like required and validation.
    pub async fn get_form_question(&self, form_id: i64, qid: u32) -> Result<Vec<u8>> {
        self.get(&format!("form/{form_id}/question/{qid}"), &[])
            .await
    }

    /// List a form's submissions.
    pub async fn get_form_submissions(
        &self,
        form_id: i64,
        options: &ListOptions,
    ) -> Result<Vec<u8>> {
        self.get(&format!("form/{form_id}/submissions"), &options.to_query())
            .await
    }

    /// Submit data to a form. Keys are question IDs; `3_first`-style keys
    /// address a question sub-field. Returns the posted submission ID and
    /// URL.
    pub async fn create_form_submission(
        &self,
        form_id: i64,
        submission: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        self.post(
            &format!("form/{form_id}/submissions"),
            &submission_form(submission, &[]),
        )
        .await
    }

    /// Submit raw JSON submission data to a form.
    pub async fn create_form_submissions(
        &self,
        form_id: i64,
        submissions: Vec<u8>,
    ) -> Result<Vec<u8>> {
        self.put(&format!("form/{form_id}/submissions"), submissions)
            .await
    }

    /// List files uploaded to a form.
    pub async fn get_form_files(&self, form_id: i64) -> Result<Vec<u8>> {
        self.get(&format!("form/{form_id}/files"), &[]).await
    }

    /// List a form's webhooks.
    pub async fn get_form_webhooks(&self, form_id: i64) -> Result<Vec<u8>> {
        self.get(&format!("form/{form_id}/webhooks"), &[]).await
    }

    /// Add a webhook; form data is posted to the URL on each submission.
    pub async fn create_form_webhook(&self, form_id: i64, webhook_url: &str) -> Result<Vec<u8>> {
        self.post(
            &format!("form/{form_id}/webhooks"),
            &[("webhookURL".to_string(), webhook_url.to_string())],
        )
        .await
    }

    /// Delete a webhook. Returns the form's remaining webhook URLs.
    pub async fn delete_form_webhook(&self, form_id: i64, webhook_id: i64) -> Result<Vec<u8>> {
        self.delete(&format!("form/{form_id}/webhooks/{webhook_id}"))
            .await
    }

    /// List form properties: width, expiration date, style and so on.
    pub async fn get_form_properties(&self, form_id: i64) -> Result<Vec<u8>> {
        self.get(&format!("form/{form_id}/properties"), &[]).await
    }

    /// Get a single form property by key.
    pub async fn get_form_property(&self, form_id: i64, property_key: &str) -> Result<Vec<u8>> {
        self.get(&format!("form/{form_id}/properties/{property_key}"), &[])
            .await
    }

    /// Add or edit form properties.
    pub async fn set_form_properties(
        &self,
        form_id: i64,
        properties: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        self.post(
            &format!("form/{form_id}/properties"),
            &prefixed_form("properties", properties),
        )
        .await
    }

    /// Add or edit form properties from a raw JSON object.
    pub async fn set_multiple_form_properties(
        &self,
        form_id: i64,
        properties: Vec<u8>,
    ) -> Result<Vec<u8>> {
        self.put(&format!("form/{form_id}/properties"), properties)
            .await
    }

    /// List a form's reports: excel, csv, grid, html and so on.
    pub async fn get_form_reports(&self, form_id: i64) -> Result<Vec<u8>> {
        self.get(&format!("form/{form_id}/reports"), &[]).await
    }

    /// Create a report on a form. `report` lists type, title etc. Returns
    /// the report details and URL.
    pub async fn create_report(&self, form_id: i64, report: &[(&str, &str)]) -> Result<Vec<u8>> {
        self.post(&format!("form/{form_id}/reports"), &owned_pairs(report))
            .await
    }

    /// Clone a form.
    pub async fn clone_form(&self, form_id: i64) -> Result<Vec<u8>> {
        self.post(&format!("form/{form_id}/clone"), &[]).await
    }

    /// Add a new question to a form.
    pub async fn create_form_question(
        &self,
        form_id: i64,
        question: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        self.post(
            &format!("form/{form_id}/questions"),
            &prefixed_form("question", question),
        )
        .await
    }

    /// Add new questions from a raw JSON definition.
    pub async fn create_form_questions(&self, form_id: i64, questions: Vec<u8>) -> Result<Vec<u8>> {
        self.put(&format!("form/{form_id}/questions"), questions)
            .await
    }

    /// Add or edit a single question's properties.
    pub async fn edit_form_question(
        &self,
        form_id: i64,
        qid: u32,
        question: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        self.post(
            &format!("form/{form_id}/question/{qid}"),
            &prefixed_form("question", question),
        )
        .await
    }

    /// Delete a single question.
    pub async fn delete_form_question(&self, form_id: i64, qid: u32) -> Result<Vec<u8>> {
        self.delete(&format!("form/{form_id}/question/{qid}")).await
    }

    /// Delete a form. Returns the deleted form's properties.
    pub async fn delete_form(&self, form_id: i64) -> Result<Vec<u8>> {
        self.delete(&format!("form/{form_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::JotformClient;
    use crate::testing::{requests_of, MockHttp, Recorded};

    const EMPTY: &str = r#"{"content":{}}"#;

    #[tokio::test]
    async fn create_form_submission_wraps_answer_keys() {
        let client = JotformClient::with_http(MockHttp::returning(EMPTY));

        client
            .create_form_submission(91234, &[("1_first", "Ada"), ("4", "yes")])
            .await
            .unwrap();

        let requests = requests_of(&client);
        assert_eq!(
            requests,
            vec![Recorded::PostForm {
                url: "https://api.jotform.com/v1/form/91234/submissions".to_string(),
                form: vec![
                    ("submission[1][first]".to_string(), "Ada".to_string()),
                    ("submission[4]".to_string(), "yes".to_string()),
                ],
            }]
        );
    }

    #[tokio::test]
    async fn question_edits_use_question_prefix() {
        let client = JotformClient::with_http(MockHttp::returning(EMPTY));

        client
            .edit_form_question(91234, 7, &[("text", "Your name")])
            .await
            .unwrap();

        let requests = requests_of(&client);
        assert_eq!(
            requests,
            vec![Recorded::PostForm {
                url: "https://api.jotform.com/v1/form/91234/question/7".to_string(),
                form: vec![("question[text]".to_string(), "Your name".to_string())],
            }]
        );
    }

    #[tokio::test]
    async fn webhook_delete_addresses_both_ids() {
        let client = JotformClient::with_http(MockHttp::returning(EMPTY));

        client.delete_form_webhook(91234, 2).await.unwrap();

        let requests = requests_of(&client);
        assert_eq!(
            requests,
            vec![Recorded::Delete {
                url: "https://api.jotform.com/v1/form/91234/webhooks/2".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn clone_form_posts_empty_body() {
        let client = JotformClient::with_http(MockHttp::returning(EMPTY));

        client.clone_form(91234).await.unwrap();

        let requests = requests_of(&client);
        assert_eq!(
            requests,
            vec![Recorded::PostForm {
                url: "https://api.jotform.com/v1/form/91234/clone".to_string(),
                form: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn raw_question_payloads_go_out_as_put() {
        let client = JotformClient::with_http(MockHttp::returning(EMPTY));

        let payload = br#"{"questions":{"1":{"type":"control_head"}}}"#.to_vec();
        client
            .create_form_questions(91234, payload.clone())
            .await
            .unwrap();

        let requests = requests_of(&client);
        assert_eq!(
            requests,
            vec![Recorded::Put {
                url: "https://api.jotform.com/v1/form/91234/questions".to_string(),
                body: payload,
            }]
        );
    }
}
