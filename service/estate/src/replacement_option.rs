use std::sync::Arc;

use async_trait::async_trait;
use domain_estate::{
    exception::{EstateException, EstateResult},
    model::{entity::ReplacementOption, vo::ReplacementOptionPayload},
    repository::ReplacementOptionRepo,
    service::ReplacementOptionService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct ReplacementOptionServiceImpl {
    replacement_option_repo: Arc<dyn ReplacementOptionRepo>,
}

impl ReplacementOptionServiceImpl {
    async fn find(&self, id: i32) -> EstateResult<ReplacementOption> {
        self.replacement_option_repo
            .get_by_id(id)
            .await?
            .ok_or(EstateException::NotFound {
                entity: "replacement option",
                id,
            })
    }

    async fn replace(&self, option: ReplacementOption) -> EstateResult<ReplacementOption> {
        self.replacement_option_repo.update(&option).await?;
        self.replacement_option_repo.save_changed().await?;
        tracing::info!("Updated replacement option {}: {option}", option.id);
        Ok(option)
    }
}

#[async_trait]
impl ReplacementOptionService for ReplacementOptionServiceImpl {
    async fn list(&self) -> EstateResult<Vec<ReplacementOption>> {
        Ok(self.replacement_option_repo.get_all().await?)
    }

    async fn get(&self, id: i32) -> EstateResult<ReplacementOption> {
        self.find(id).await
    }

    async fn create(&self, payload: ReplacementOptionPayload) -> EstateResult<ReplacementOption> {
        let option = payload.validate(0).map_err(|errors| {
            tracing::debug!("Rejected replacement option: {errors}");
            errors
        })?;
        let option = self.replacement_option_repo.insert(&option).await?;
        tracing::info!(
            "Created replacement option {}: {option} at {}",
            option.id,
            option.price
        );
        Ok(option)
    }

    async fn update(
        &self,
        id: i32,
        payload: ReplacementOptionPayload,
    ) -> EstateResult<ReplacementOption> {
        let stored = self.find(id).await?;
        let option = payload.fill_optional(&stored).validate(id)?;
        self.replace(option).await
    }

    async fn partial_update(
        &self,
        id: i32,
        payload: ReplacementOptionPayload,
    ) -> EstateResult<ReplacementOption> {
        let stored = self.find(id).await?;
        let option = payload.patch(&stored).validate(id)?;
        self.replace(option).await
    }

    async fn delete(&self, id: i32) -> EstateResult<()> {
        let option = self.find(id).await?;
        self.replacement_option_repo.delete_by_id(id).await?;
        self.replacement_option_repo.save_changed().await?;
        tracing::info!("Deleted replacement option {id}: {option}");
        Ok(())
    }
}
