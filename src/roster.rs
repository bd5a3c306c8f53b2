// mesa/src/roster.rs
// This module holds the session roster of hosts and the single id lookup table.

use crate::defs::HostId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A host that can be seated on the board. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Host {
    pub id: HostId,
    pub code: String,
    pub name: String,
    pub avatar_ref: String,
}

/// The per-session roster. Every host metadata lookup in the crate goes
/// through this table, keyed by id. Serializes as the plain host list; the
/// lookup map is rebuilt on construction, so no Deserialize here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Roster {
    hosts: Vec<Host>,
    #[serde(skip)]
    by_id: HashMap<HostId, usize>,
}

impl Roster {
    pub fn new(hosts: Vec<Host>) -> Self {
        let by_id = hosts
            .iter()
            .enumerate()
            .map(|(index, host)| (host.id, index))
            .collect();
        Roster { hosts, by_id }
    }

    pub fn get(&self, id: HostId) -> Option<&Host> {
        self.by_id.get(&id).map(|&index| &self.hosts[index])
    }

    pub fn contains(&self, id: HostId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn ids(&self) -> Vec<HostId> {
        self.hosts.iter().map(|host| host.id).collect()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
