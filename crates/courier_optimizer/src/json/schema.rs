use schemars::schema_for;

use crate::json::types;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonRoutingRequest))
}

pub fn generate_reoptimization_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonReoptimizationRequest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemas_name_request_fields() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"stops\""));
        assert!(schema.contains("\"matrix_provider\""));

        let schema = generate_reoptimization_json_schema().unwrap();
        assert!(schema.contains("\"dropped\""));
    }
}
