use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Coachee organization (`GET /coachee_organizations`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Organization {
    #[serde(alias = "coe_id", alias = "org_id")]
    pub id: i64,
    #[serde(default, alias = "coe_name")]
    pub name: String,
    #[serde(default, alias = "coe_email")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn organization_name(organizations: &[Organization], id: Option<i64>) -> Option<&str> {
    let id = id?;
    organizations
        .iter()
        .find(|org| org.id == id)
        .map(|org| org.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_column_names() {
        let json = r#"[{"coe_id": 1, "coe_name": "Acme"}, {"id": 2, "name": "Globex", "email": "hr@globex.com"}]"#;
        let orgs: Vec<Organization> = serde_json::from_str(json).unwrap();
        assert_eq!(organization_name(&orgs, Some(1)), Some("Acme"));
        assert_eq!(organization_name(&orgs, Some(2)), Some("Globex"));
        assert_eq!(organization_name(&orgs, Some(9)), None);
        assert_eq!(organization_name(&orgs, None), None);
    }
}
