use std::{fmt, str::FromStr};

/// Identifies a namespaced resource by the pair that names it in logs and
/// configuration, `namespace/name`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ResourceId {
    pub namespace: String,
    pub name: String,
}

#[derive(Clone, Debug, thiserror::Error, Eq, PartialEq)]
#[error("expected 'namespace/name', got {0:?}")]
pub struct InvalidResourceId(String);

// === impl ResourceId ===

impl ResourceId {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn matches(&self, namespace: &str, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for ResourceId {
    type Err = InvalidResourceId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((namespace, name))
                if !namespace.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(namespace, name))
            }
            _ => Err(InvalidResourceId(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceId;

    #[test]
    fn parses_namespace_and_name() {
        let id = "kube-system/coredns".parse::<ResourceId>().unwrap();
        assert_eq!(id, ResourceId::new("kube-system", "coredns"));
        assert_eq!(id.to_string(), "kube-system/coredns");
    }

    #[test]
    fn rejects_malformed() {
        for s in ["", "coredns", "/coredns", "kube-system/", "a/b/c"] {
            assert!(s.parse::<ResourceId>().is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn matches_both_components() {
        let id = ResourceId::new("default", "web");
        assert!(id.matches("default", "web"));
        assert!(!id.matches("default", "api"));
        assert!(!id.matches("prod", "web"));
    }
}
