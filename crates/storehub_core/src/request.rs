//! Request payload shapes handed over by the transport layer.
//!
//! Field names follow the wire convention (camelCase). Payloads carry raw
//! strings; validation happens in the model when services consume them.

use crate::model::company::CompanyId;
use crate::service::error::ServiceError;
use serde::Deserialize;

/// Body of company create/update requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    /// Optional on create; on update it must match the target id when set.
    #[serde(default)]
    pub id: Option<CompanyId>,
    pub name: String,
}

impl CompanyPayload {
    /// Returns the name to apply to `target`, rejecting a mismatched body id.
    pub fn name_for_target(&self, target: CompanyId) -> Result<&str, ServiceError> {
        match self.id {
            Some(id) if id != target => Err(ServiceError::BadRequest(format!(
                "company id in path ({target}) and body ({id}) do not match"
            ))),
            _ => Ok(self.name.as_str()),
        }
    }
}

/// Body of store create requests. Owner comes from the tenant context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCreatePayload {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Body of store update requests. Only name and address can change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreUpdatePayload {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::CompanyPayload;
    use crate::service::error::{OutcomeKind, ServiceError};
    use uuid::Uuid;

    #[test]
    fn payload_without_id_applies_to_any_target() {
        let payload = CompanyPayload {
            id: None,
            name: "Acme".to_string(),
        };
        assert_eq!(payload.name_for_target(Uuid::new_v4()).unwrap(), "Acme");
    }

    #[test]
    fn mismatched_payload_id_is_bad_request() {
        let payload = CompanyPayload {
            id: Some(Uuid::new_v4()),
            name: "Acme".to_string(),
        };
        let err = payload.name_for_target(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));
        assert_eq!(err.outcome(), OutcomeKind::BadRequest);
    }
}
