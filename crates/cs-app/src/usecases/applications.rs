use std::sync::Arc;

use anyhow::Result;
use cs_core::history::SourceApplication;
use cs_core::ids::ApplicationId;
use cs_core::ports::ApplicationRepositoryPort;
use tracing::info;

/// Source application list and the per-application ignore flag.
pub struct ManageApplications {
    applications: Arc<dyn ApplicationRepositoryPort>,
}

impl ManageApplications {
    pub fn new(applications: Arc<dyn ApplicationRepositoryPort>) -> Self {
        Self { applications }
    }

    pub async fn list(&self) -> Result<Vec<SourceApplication>> {
        Ok(self.applications.list_applications().await?)
    }

    pub async fn list_ignored(&self) -> Result<Vec<SourceApplication>> {
        Ok(self.applications.list_ignored_applications().await?)
    }

    /// Marks the application at `bundle_url` as ignored, registering it
    /// first if it has never been seen.
    #[tracing::instrument(name = "usecase.applications.ignore", skip(self))]
    pub async fn ignore(&self, bundle_url: &str) -> Result<SourceApplication> {
        let application = self
            .applications
            .create_application(bundle_url, true)
            .await?;
        if application.should_ignore {
            return Ok(application);
        }

        let updated = self
            .applications
            .set_ignored(&application.id, true)
            .await?
            .unwrap_or(SourceApplication {
                should_ignore: true,
                ..application
            });
        info!(application_id = %updated.id, "application ignored");
        Ok(updated)
    }

    #[tracing::instrument(name = "usecase.applications.unignore", skip_all, fields(count = ids.len()))]
    pub async fn unignore(&self, ids: &[ApplicationId]) -> Result<u64> {
        let updated = self.applications.set_ignored_many(ids, false).await?;
        info!(updated, "applications unignored");
        Ok(updated)
    }

    pub async fn set_ignored(
        &self,
        id: &ApplicationId,
        should_ignore: bool,
    ) -> Result<Option<SourceApplication>> {
        Ok(self.applications.set_ignored(id, should_ignore).await?)
    }
}
