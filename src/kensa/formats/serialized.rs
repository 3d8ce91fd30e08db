//! serde-backed formats
//!
//! Both formats emit the `{ name, children }` structure of [TreeNode] unchanged.

use super::registry::{FormatError, Formatter};
use crate::kensa::tree::TreeNode;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &TreeNode) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tree)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tree as JSON objects with name and children"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tree: &TreeNode) -> Result<String, FormatError> {
        serde_yaml::to_string(tree).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tree as YAML mappings with name and children"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::with_children(
            "GetUser",
            vec![TreeNode::with_children(
                "projects",
                vec![TreeNode::leaf("id")],
            )],
        )
    }

    #[test]
    fn test_json_round_trip() {
        let json = JsonFormatter.serialize(&sample()).unwrap();
        let back: TreeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_json_uses_name_and_children_keys() {
        let json = JsonFormatter.serialize(&TreeNode::leaf("ping")).unwrap();
        assert_eq!(json, "{\n  \"name\": \"ping\",\n  \"children\": []\n}\n");
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = YamlFormatter.serialize(&sample()).unwrap();
        assert!(yaml.contains("name: GetUser"));
        let back: TreeNode = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, sample());
    }
}
