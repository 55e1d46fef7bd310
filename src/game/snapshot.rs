//! Serializable game state for result logging

use serde::{Deserialize, Serialize};

/// Game configuration and secret, by color name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub code_length: usize,
    pub possible_colors: Vec<String>,
    pub duplicates_allowed: bool,
    pub secret_code: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_field_names() {
        let snapshot = GameSnapshot {
            code_length: 2,
            possible_colors: vec!["red".to_string(), "blue".to_string()],
            duplicates_allowed: true,
            secret_code: vec!["blue".to_string(), "blue".to_string()],
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["code_length"], 2);
        assert_eq!(json["possible_colors"][1], "blue");
        assert_eq!(json["duplicates_allowed"], true);
        assert_eq!(json["secret_code"][0], "blue");

        let back: GameSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
