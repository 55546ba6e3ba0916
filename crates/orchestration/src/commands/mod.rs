//! Command handler layer.
//!
//! ## Files
//! - `show.rs`: one resource type, or a template skeleton generated from it.
//! - `list.rs`: resource type listing with optional filters.
//!
//! ## Principles
//! - Validate local input before touching the client.
//! - One client call per command, no retries.
//! - Hand back a `Table`; rendering is the formatter's job.

pub mod list;
pub mod show;

pub use list::{list_resource_types, LIST_COLUMN};
pub use show::{parse_template_type, show_resource_type};

#[cfg(test)]
pub(crate) mod mock {
    //! Recording stand-in for the orchestration client

    use orchestration_core::{
        ClientError, FilterSet, ResourceTypeRecord, ResourceTypeSummary, ResourceTypes,
        TemplateType,
    };
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Get(String),
        GenerateTemplate(String, TemplateType),
        List(FilterSet),
    }

    /// What the mock answers with
    pub enum Reply {
        Record(ResourceTypeRecord),
        Summaries(Vec<ResourceTypeSummary>),
        NotFound,
        ServerError,
    }

    pub struct MockClient {
        reply: Reply,
        calls: RefCell<Vec<Call>>,
    }

    impl MockClient {
        pub fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self) -> Result<ResourceTypeRecord, ClientError> {
            match &self.reply {
                Reply::Record(record) => Ok(record.clone()),
                Reply::Summaries(_) => Ok(ResourceTypeRecord::new()),
                Reply::NotFound => Err(ClientError::NotFound("gone".to_string())),
                Reply::ServerError => Err(server_error()),
            }
        }
    }

    pub fn server_error() -> ClientError {
        ClientError::Http {
            status: 500,
            message: "boom".to_string(),
        }
    }

    impl ResourceTypes for MockClient {
        fn get(&self, resource_type: &str) -> Result<ResourceTypeRecord, ClientError> {
            self.calls
                .borrow_mut()
                .push(Call::Get(resource_type.to_string()));
            self.record()
        }

        fn generate_template(
            &self,
            resource_type: &str,
            template_type: TemplateType,
        ) -> Result<ResourceTypeRecord, ClientError> {
            self.calls.borrow_mut().push(Call::GenerateTemplate(
                resource_type.to_string(),
                template_type,
            ));
            self.record()
        }

        fn list(&self, filters: &FilterSet) -> Result<Vec<ResourceTypeSummary>, ClientError> {
            self.calls.borrow_mut().push(Call::List(filters.clone()));
            match &self.reply {
                Reply::Summaries(summaries) => Ok(summaries.clone()),
                Reply::Record(_) => Ok(Vec::new()),
                Reply::NotFound => Err(ClientError::NotFound("gone".to_string())),
                Reply::ServerError => Err(server_error()),
            }
        }
    }
}
