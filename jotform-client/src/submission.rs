// jotform-client/src/submission.rs
use crate::client::JotformClient;
use crate::error::Result;
use crate::http::HttpClient;
use crate::params::submission_form;

impl<C: HttpClient> JotformClient<C> {
    /// Get a single submission's information and answers. Submission IDs
    /// come from `/form/{id}/submissions`.
    pub async fn get_submission(&self, submission_id: i64) -> Result<Vec<u8>> {
        self.get(&format!("user/submission/{submission_id}"), &[])
            .await
    }

    /// Edit a single submission. `created_at` is passed through as-is; other
    /// `_` keys address question sub-fields.
    pub async fn edit_submission(
        &self,
        submission_id: i64,
        submission: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        self.post(
            &format!("submission/{submission_id}"),
            &submission_form(submission, &["created_at"]),
        )
        .await
    }

    /// Delete a single submission.
    pub async fn delete_submission(&self, submission_id: i64) -> Result<Vec<u8>> {
        self.delete(&format!("submission/{submission_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::JotformClient;
    use crate::testing::{requests_of, MockHttp, Recorded};

    const EMPTY: &str = r#"{"content":{}}"#;

    #[tokio::test]
    async fn edit_keeps_created_at_whole() {
        let client = JotformClient::with_http(MockHttp::returning(EMPTY));

        client
            .edit_submission(
                5551234,
                &[("1_first", "Grace"), ("created_at", "2024-06-01 10:00:00")],
            )
            .await
            .unwrap();

        let requests = requests_of(&client);
        assert_eq!(
            requests,
            vec![Recorded::PostForm {
                url: "https://api.jotform.com/v1/submission/5551234".to_string(),
                form: vec![
                    ("submission[1][first]".to_string(), "Grace".to_string()),
                    (
                        "submission[created_at]".to_string(),
                        "2024-06-01 10:00:00".to_string()
                    ),
                ],
            }]
        );
    }

    #[tokio::test]
    async fn get_submission_is_user_scoped() {
        let client = JotformClient::with_http(MockHttp::returning(EMPTY));

        client.get_submission(5551234).await.unwrap();

        let requests = requests_of(&client);
        assert_eq!(
            requests,
            vec![Recorded::Get {
                url: "https://api.jotform.com/v1/user/submission/5551234".to_string(),
                query: vec![],
            }]
        );
    }
}
