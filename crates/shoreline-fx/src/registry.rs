//! Tracks live mounts so each container holds at most one surface

use std::collections::HashMap;

/// Something that owns resources and can release them
///
/// `teardown` must be idempotent: calling it again is a no-op.
pub trait Teardown {
    fn teardown(&mut self);
}

/// Container id -> live mount handle
pub struct MountRegistry<H: Teardown> {
    mounts: HashMap<String, H>,
}

impl<H: Teardown> Default for MountRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Teardown> MountRegistry<H> {
    pub fn new() -> Self {
        Self {
            mounts: HashMap::new(),
        }
    }

    /// Tear down whatever is mounted in `key`, then build and record a new mount
    ///
    /// The previous handle is always released before `build` runs, so two
    /// surfaces never coexist in one container. When `build` returns `None`
    /// (nothing to mount) the slot stays empty.
    pub fn replace_with<F>(&mut self, key: &str, build: F) -> Option<&mut H>
    where
        F: FnOnce() -> Option<H>,
    {
        self.unmount(key);
        let handle = build()?;
        self.mounts.insert(key.to_string(), handle);
        self.mounts.get_mut(key)
    }

    /// Tear down and forget the mount in `key`; returns whether one existed
    pub fn unmount(&mut self, key: &str) -> bool {
        match self.mounts.remove(key) {
            Some(mut handle) => {
                handle.teardown();
                true
            }
            None => false,
        }
    }

    /// Tear down every mount
    pub fn unmount_all(&mut self) {
        for (_, mut handle) in self.mounts.drain() {
            handle.teardown();
        }
    }

    pub fn get(&self, key: &str) -> Option<&H> {
        self.mounts.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.mounts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Probe {
        live: Rc<Cell<i32>>,
        released: bool,
    }

    impl Probe {
        fn new(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Self {
                live: live.clone(),
                released: false,
            }
        }
    }

    impl Teardown for Probe {
        fn teardown(&mut self) {
            if !self.released {
                self.released = true;
                self.live.set(self.live.get() - 1);
            }
        }
    }

    #[test]
    fn test_replace_tears_down_previous_first() {
        let live = Rc::new(Cell::new(0));
        let mut registry = MountRegistry::new();

        registry.replace_with("aurora", || Some(Probe::new(&live)));
        assert_eq!(live.get(), 1);

        let observed = Rc::new(Cell::new(-1));
        let seen = observed.clone();
        let l = live.clone();
        registry.replace_with("aurora", move || {
            seen.set(l.get());
            Some(Probe::new(&l))
        });

        assert_eq!(observed.get(), 0, "old mount must be gone before the new one is built");
        assert_eq!(live.get(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_replace_with_none_leaves_slot_empty() {
        let live = Rc::new(Cell::new(0));
        let mut registry = MountRegistry::new();
        registry.replace_with("aurora", || Some(Probe::new(&live)));
        assert!(registry.replace_with("aurora", || None).is_none());
        assert!(!registry.contains("aurora"));
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_unmount_twice() {
        let live = Rc::new(Cell::new(0));
        let mut registry = MountRegistry::new();
        registry.replace_with("a", || Some(Probe::new(&live)));
        assert!(registry.unmount("a"));
        assert!(!registry.unmount("a"));
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_independent_containers() {
        let live = Rc::new(Cell::new(0));
        let mut registry = MountRegistry::new();
        registry.replace_with("aurora", || Some(Probe::new(&live)));
        registry.replace_with("aurora-bg", || Some(Probe::new(&live)));
        assert_eq!(live.get(), 2);

        registry.unmount_all();
        assert_eq!(live.get(), 0);
        assert!(registry.is_empty());
    }
}
