// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered entity registry.

use alloc::vec::Vec;

use crate::types::Capabilities;

/// Ordered set of entity handles with their declared [`Capabilities`].
///
/// Insertion order is dispatch order for every event kind. The same handle may be
/// added more than once; each entry is then visited separately, and
/// [`Registry::remove`] drops all of them.
///
/// Capabilities are fixed at [`Registry::add`]. To change them, remove the
/// entity and add it again.
#[derive(Clone, Debug)]
pub struct Registry<K> {
    entries: Vec<(K, Capabilities)>,
}

impl<K> Default for Registry<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> Registry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity.
    pub fn add(&mut self, entity: K, capabilities: Capabilities) {
        self.entries.push((entity, capabilities));
    }

    /// Remove every entry for `entity`. Returns true if there was at least one.
    pub fn remove(&mut self, entity: &K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != entity);
        self.entries.len() != before
    }

    /// Entity handles in insertion order.
    pub fn list(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|&(k, _)| k)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Capabilities)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the entity has at least one entry.
    pub fn contains(&self, entity: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == entity)
    }

    /// Capabilities of the first entry for `entity`.
    pub fn capabilities(&self, entity: &K) -> Option<Capabilities> {
        self.entries
            .iter()
            .find(|(k, _)| k == entity)
            .map(|&(_, caps)| caps)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// An owned copy of the entries, as iterated by a dispatch pass.
    pub fn snapshot(&self) -> Vec<(K, Capabilities)> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn add_keeps_insertion_order() {
        let mut reg = Registry::new();
        reg.add(3_u32, Capabilities::TICK);
        reg.add(1, Capabilities::DRAW);
        reg.add(2, Capabilities::COLLIDABLE);
        assert_eq!(reg.list().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.capabilities(&2), Some(Capabilities::COLLIDABLE));
        assert_eq!(reg.capabilities(&9), None);
    }

    #[test]
    fn remove_drops_every_duplicate() {
        let mut reg = Registry::new();
        reg.add('a', Capabilities::TICK);
        reg.add('b', Capabilities::TICK);
        reg.add('a', Capabilities::DRAW);
        assert_eq!(reg.capabilities(&'a'), Some(Capabilities::TICK));
        assert!(reg.remove(&'a'));
        assert!(!reg.contains(&'a'));
        assert_eq!(reg.list().collect::<Vec<_>>(), vec!['b']);
        assert!(!reg.remove(&'a'), "second remove finds nothing");
    }

    #[test]
    fn snapshot_is_detached() {
        let mut reg = Registry::new();
        reg.add(1_u8, Capabilities::TICK);
        let snap = reg.snapshot();
        reg.add(2, Capabilities::TICK);
        reg.remove(&1);
        assert_eq!(snap, vec![(1, Capabilities::TICK)]);
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec![(2, Capabilities::TICK)]);
        reg.clear();
        assert!(reg.is_empty());
    }
}
