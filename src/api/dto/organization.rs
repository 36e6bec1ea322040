//! DTOs for organization endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Department, Employee, NewOrganization, Organization};

/// Request body for `POST /`.
///
/// Fields the server owns (`id`, `created_at`, `departments`, `employees`)
/// are ignored if a client sends them.
#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl From<CreateOrganizationRequest> for NewOrganization {
    fn from(request: CreateOrganizationRequest) -> Self {
        NewOrganization {
            name: request.name,
            address: request.address,
        }
    }
}

/// Organization as returned by every endpoint.
///
/// `departments` and `employees` are always present; they are empty unless
/// the endpoint enriches them.
#[derive(Debug, Serialize)]
pub struct OrganizationItem {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
}

impl From<Organization> for OrganizationItem {
    fn from(o: Organization) -> Self {
        OrganizationItem {
            id: o.id,
            name: o.name,
            address: o.address,
            created_at: o.created_at,
            departments: o.departments,
            employees: o.employees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_ignores_server_owned_fields() {
        let request: CreateOrganizationRequest = serde_json::from_value(json!({
            "id": 42,
            "name": "Acme",
            "departments": [{"id": 1}],
            "employees": [{"id": 2}]
        }))
        .unwrap();

        let new: NewOrganization = request.into();
        assert_eq!(new.name, "Acme");
        assert!(new.address.is_none());
    }

    #[test]
    fn test_create_request_requires_name() {
        let result = serde_json::from_value::<CreateOrganizationRequest>(json!({"address": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_item_serializes_empty_collections() {
        let item = OrganizationItem::from(Organization::new(
            1,
            "Acme".to_string(),
            None,
            Utc::now(),
        ));

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Acme");
        assert_eq!(value["departments"], json!([]));
        assert_eq!(value["employees"], json!([]));
    }
}
