use crate::IgnoreListError;
use crate::model::PackageInfoSet;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Exact-match lookup from `(package, target framework)` to ignored version patterns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreIndex {
    rules: HashMap<String, Vec<String>>,
}

impl IgnoreIndex {
    /// Composite key used for every rule: `{package}_{framework}`.
    ///
    /// An undetected framework is the empty string, so `Foo` without a framework is `Foo_`.
    pub fn rule_key(package: &str, framework: Option<&str>) -> String {
        format!("{}_{}", package, framework.unwrap_or(""))
    }

    /// Parse the JSON payload served at the ignore-list URL.
    pub fn parse_json(text: &str) -> Result<Self, IgnoreListError> {
        let payload: Option<PackageInfoSet> =
            serde_json::from_str(text).map_err(IgnoreListError::Malformed)?;
        let payload = payload.ok_or(IgnoreListError::Empty)?;
        Self::from_payload(payload)
    }

    pub fn from_payload(payload: PackageInfoSet) -> Result<Self, IgnoreListError> {
        let mut rules = HashMap::new();
        for package in payload.packages {
            for mapping in package.mapping {
                let key = Self::rule_key(&package.name, Some(&mapping.target_framework));
                match rules.entry(key) {
                    Entry::Occupied(e) => {
                        return Err(IgnoreListError::DuplicateRule {
                            key: e.key().clone(),
                        });
                    }
                    Entry::Vacant(e) => {
                        e.insert(mapping.ignore);
                    }
                }
            }
        }
        Ok(Self { rules })
    }

    pub fn lookup(&self, package: &str, framework: Option<&str>) -> Option<&[String]> {
        self.rules
            .get(&Self::rule_key(package, framework))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
