//! Workspace roster used as the lookup table for mention extraction

use std::collections::BTreeMap;

use crate::entities::{Member, User};
use crate::value_objects::Snowflake;

/// Member id to display name for one workspace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRoster {
    names: BTreeMap<Snowflake, String>,
}

impl MemberRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, member_id: Snowflake, display_name: impl Into<String>) {
        self.names.insert(member_id, display_name.into());
    }

    pub fn contains(&self, member_id: Snowflake) -> bool {
        self.names.contains_key(&member_id)
    }

    pub fn display_name(&self, member_id: Snowflake) -> Option<&str> {
        self.names.get(&member_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Members that can be matched by `@name`; blank names are skipped
    pub fn named_members(&self) -> impl Iterator<Item = (Snowflake, &str)> {
        self.names
            .iter()
            .filter(|(_, name)| !name.is_empty())
            .map(|(id, name)| (*id, name.as_str()))
    }
}

impl FromIterator<(Snowflake, String)> for MemberRoster {
    fn from_iter<I: IntoIterator<Item = (Snowflake, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a (Member, User)> for MemberRoster {
    fn from_iter<I: IntoIterator<Item = &'a (Member, User)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(member, user)| (member.id, user.name.clone()))
            .collect()
    }
}
