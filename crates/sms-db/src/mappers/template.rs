//! Template entity <-> model mapper

use sms_core::entities::SmsTemplate;

use crate::models::TemplateModel;

/// Convert TemplateModel to SmsTemplate entity
impl From<TemplateModel> for SmsTemplate {
    fn from(model: TemplateModel) -> Self {
        SmsTemplate {
            id: model.id,
            name: model.name,
            content: model.content,
            category: model.category,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
