use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named, addressed backend target.
///
/// Two endpoints are the same endpoint when their name and address match.
/// The priority is carried along but is not part of the identity, so a failed
/// endpoint can still be demoted after discovery has reassigned its priority.
#[derive(Debug, Clone, Serialize)]
pub struct Endpoint {
    name: String,
    address: String,
    // 0 being the highest priority
    priority: u32,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, address: impl Into<String>, priority: u32) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            priority,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.address == other.address
    }
}

impl Eq for Endpoint {}

impl Hash for Endpoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.address.hash(state);
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_priority() {
        let a = Endpoint::new("node-a", "10.0.0.1:7000", 0);
        let b = Endpoint::new("node-a", "10.0.0.1:7000", 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_requires_name_and_address() {
        let a = Endpoint::new("node-a", "10.0.0.1:7000", 0);
        assert_ne!(a, Endpoint::new("node-b", "10.0.0.1:7000", 0));
        assert_ne!(a, Endpoint::new("node-a", "10.0.0.2:7000", 0));
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Endpoint::new("node-a", "10.0.0.1:7000", 0));
        set.insert(Endpoint::new("node-a", "10.0.0.1:7000", 3));
        set.insert(Endpoint::new("node-b", "10.0.0.2:7000", 0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let endpoint = Endpoint::new("node-a", "10.0.0.1:7000", 1);
        assert_eq!(endpoint.to_string(), "node-a@10.0.0.1:7000");
    }

    #[test]
    fn test_serialize_includes_priority() {
        let endpoint = Endpoint::new("node-a", "10.0.0.1:7000", 2);
        let value = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "node-a",
                "address": "10.0.0.1:7000",
                "priority": 2
            })
        );
    }
}
