/// User processing - fetch from the directory, then analyze
use crate::{
    config::ServiceConfig,
    error::{Result, ServerError},
    services::analysis::{analyze_user, EmailClassifier, UserAnalysis},
};
use tracing::{debug, info};
use userhub_core::UserId;
use userhub_directory_client::DirectoryClient;

#[derive(Debug, Clone)]
pub struct UserProcessor {
    client: DirectoryClient,
    classifier: EmailClassifier,
}

impl UserProcessor {
    pub fn new(client: DirectoryClient, classifier: EmailClassifier) -> Self {
        Self { client, classifier }
    }

    /// Build the directory client and classifier described by `config`
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let client = DirectoryClient::new(config.directory.client_config())
            .map_err(|e| ServerError::Config(e.to_string()))?;
        let classifier = EmailClassifier::new(&config.analysis.public_providers);
        Ok(Self::new(client, classifier))
    }

    pub fn directory_url(&self) -> &str {
        self.client.url()
    }

    /// Fetch one user and build its report
    pub async fn process_user(&self, id: &UserId) -> Result<UserAnalysis> {
        debug!(user_id = %id, "Processing user");

        let user = self.client.get_user(id).await?;
        let analysis = analyze_user(&user, &self.classifier)?;

        info!(
            user_id = %analysis.user_id,
            name_parts = analysis.name_analysis.total_parts,
            is_corporate = analysis.email_analysis.is_corporate,
            "User processed"
        );

        Ok(analysis)
    }
}
