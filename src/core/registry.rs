// src/core/registry.rs

use nix::unistd::Pid;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// The single source of truth for the processes this session is responsible
/// for. Handles enter through the launcher and leave through the terminator;
/// there is no other mutation path.
///
/// Children that exit on their own are never reaped, so an entry may outlive
/// its process. That staleness window is part of the contract: the registry
/// records what the supervisor fired, not what the OS process table holds.
///
/// One mutex guards the set. The REPL thread and the shutdown thread both
/// reach it, and `drain` takes everything under a single lock so a bulk kill
/// can never interleave with a concurrent launch.
#[derive(Debug, Default)]
pub struct ProcessRegistry {
    pids: Mutex<HashSet<Pid>>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn pids(&self) -> MutexGuard<'_, HashSet<Pid>> {
        self.pids.lock().expect("process registry mutex poisoned")
    }

    pub fn insert(&self, pid: Pid) {
        self.pids().insert(pid);
    }

    /// Removes a handle. Returns `false` if it was not present.
    pub fn remove(&self, pid: Pid) -> bool {
        self.pids().remove(&pid)
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.pids().contains(&pid)
    }

    /// A point-in-time copy of the registered handles, in no particular
    /// order.
    pub fn snapshot(&self) -> Vec<Pid> {
        self.pids().iter().copied().collect()
    }

    /// Atomically takes every registered handle, leaving the registry empty.
    pub fn drain(&self) -> Vec<Pid> {
        self.pids().drain().collect()
    }

    pub fn len(&self) -> usize {
        self.pids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(raw: i32) -> Pid {
        Pid::from_raw(raw)
    }

    #[test]
    fn test_insert_remove_contains() {
        let registry = ProcessRegistry::new();
        assert!(registry.is_empty());

        registry.insert(pid(100));
        registry.insert(pid(200));
        // Duplicate insert is a no-op; the registry is a set.
        registry.insert(pid(100));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(pid(100)));
        assert!(!registry.contains(pid(300)));

        assert!(registry.remove(pid(100)));
        assert!(!registry.remove(pid(100)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_snapshot_leaves_registry_intact() {
        let registry = ProcessRegistry::new();
        registry.insert(pid(1));
        registry.insert(pid(2));

        let mut snapshot = registry.snapshot();
        snapshot.sort_unstable();

        assert_eq!(snapshot, vec![pid(1), pid(2)]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_drain_takes_everything_once() {
        let registry = ProcessRegistry::new();
        registry.insert(pid(7));
        registry.insert(pid(8));

        assert_eq!(registry.drain().len(), 2);
        assert!(registry.is_empty());
        // Draining an empty registry is a quiet no-op.
        assert!(registry.drain().is_empty());
    }

    #[test]
    fn test_registry_tracks_launches_minus_kills() {
        // For any interleaving of inserts and removes, the surviving set is
        // exactly inserts minus removes.
        let registry = ProcessRegistry::new();
        for raw in 1..=10 {
            registry.insert(pid(raw));
        }
        for raw in [2, 4, 6, 8, 10] {
            assert!(registry.remove(pid(raw)));
        }

        let mut survivors = registry.snapshot();
        survivors.sort_unstable();
        assert_eq!(
            survivors,
            [1, 3, 5, 7, 9].map(pid).to_vec(),
        );
    }
}
