//! Template management

use tracing::{info, instrument};
use validator::Validate;

use sms_core::entities::SmsTemplate;

use crate::dto::NewTemplate;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Template operations
#[derive(Debug)]
pub struct TemplateService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TemplateService<'a> {
    /// Create a new template service
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all templates
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<SmsTemplate>> {
        Ok(self.ctx.template_repo().find_all().await?)
    }

    /// Create a template
    #[instrument(skip(self, req))]
    pub async fn create(&self, req: NewTemplate) -> ServiceResult<SmsTemplate> {
        req.validate()?;

        let template = req.into_template();
        self.ctx.template_repo().create(&template).await?;

        info!(template_id = %template.id, "Template created");
        Ok(template)
    }
}
