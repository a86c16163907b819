//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Group not found: {0}")]
    GroupNotFound(Uuid),

    #[error("Member not found: {0}")]
    MemberNotFound(Uuid),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("Template not found: {0}")]
    TemplateNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No recipients selected")]
    NoRecipients,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Group name already in use: {0}")]
    GroupNameTaken(String),

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Partial write: message {message_id} may have incomplete link rows")]
    PartialWrite { message_id: Uuid },
}

impl DomainError {
    /// Get an error code string for reporting
    pub fn code(&self) -> &'static str {
        match self {
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::TemplateNotFound(_) => "UNKNOWN_TEMPLATE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NoRecipients => "NO_RECIPIENTS",
            Self::GroupNameTaken(_) => "GROUP_NAME_TAKEN",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::PartialWrite { .. } => "PARTIAL_WRITE",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GroupNotFound(_)
                | Self::MemberNotFound(_)
                | Self::MessageNotFound(_)
                | Self::TemplateNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NoRecipients)
    }

    /// Check if this failure left persisted state in need of repair
    pub fn needs_repair(&self) -> bool {
        matches!(self, Self::PartialWrite { .. })
    }
}
