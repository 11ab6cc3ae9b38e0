pub mod catalog;
pub mod dashboard;
pub mod draft;
pub mod record;

pub use crate::domain::DomainError;
pub use catalog::Catalog;
pub use draft::TemplateDraft;
pub use record::{TemplateId, TemplateRecord};
