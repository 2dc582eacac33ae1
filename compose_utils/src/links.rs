use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::split_fields;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMapping {
    entries: Vec<(String, String)>,
}

impl LinkMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service that is already present keeps its position.
    pub fn insert(&mut self, service: impl Into<String>, alias: impl Into<String>) {
        let service = service.into();
        let alias = alias.into();
        match self.entries.iter_mut().find(|(s, _)| *s == service) {
            Some((_, existing)) => *existing = alias,
            None => self.entries.push((service, alias)),
        }
    }

    pub fn get(&self, service: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == service)
            .map(|(_, alias)| alias.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(service, alias)| (service.as_str(), alias.as_str()))
    }

    pub fn to_engine_links(&self) -> Vec<String> {
        self.iter()
            .map(|(service, alias)| format!("{}:{}", service, alias))
            .collect()
    }
}

impl Serialize for LinkMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (service, alias) in &self.entries {
            map.serialize_entry(service, alias)?;
        }
        map.end()
    }
}

/// `None` means no links are configured, which is not the same as an empty
/// list. Entries with more than two fields are skipped.
pub fn parse_links<S: AsRef<str>>(links: Option<&[S]>) -> Option<LinkMapping> {
    let links = links?;
    let mut mapping = LinkMapping::new();

    for link in links {
        let link = link.as_ref();
        match split_fields(link).as_slice() {
            [service] => mapping.insert(*service, *service),
            [service, alias] => mapping.insert(*service, *alias),
            [] => {}
            _ => log::debug!("Ignoring malformed link {:?}", link),
        }
    }

    Some(mapping)
}
