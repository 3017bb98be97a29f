use serde::{Deserialize, Serialize};

/// Configuration for the user_fetch module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserFetchConfig {
    /// Scheme and host of the user service; `/api/users/{id}` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for UserFetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://reqres.in".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_uses_defaults() {
        let cfg: UserFetchConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(cfg.base_url, "https://reqres.in");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res = serde_json::from_value::<UserFetchConfig>(serde_json::json!({"timeout": 5}));
        assert!(res.is_err());
    }
}
