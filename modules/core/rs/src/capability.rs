use crate::container::Container;

/// Elements-count threshold for the direct indexed traversal. Indexed containers with at most
/// this many elements are traversed slot by slot, larger ones go through the general cursor
/// loop. Crossing the threshold never changes results.
pub const FAST_PATH_THRESHOLD: usize = 32;

/// Access pattern supported by a container type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Capability {
    /// O(1) reads at any position.
    Indexed,
    /// Forward cursors only.
    SequentialOnly,
}

/// O(1) positional reader over an indexed container.
///
/// The slot reader is a plain function pointer supplied by the container, so indexed
/// algorithm bodies stay free of trait objects.
pub struct Indexer<'a, C: Container + ?Sized + 'a> {
    container: &'a C,
    len: usize,
    slot: fn(&'a C, usize) -> C::Item<'a>,
}

impl<'a, C: Container + ?Sized + 'a> Indexer<'a, C> {
    pub fn new(container: &'a C, len: usize, slot: fn(&'a C, usize) -> C::Item<'a>) -> Self {
        Self {
            container,
            len,
            slot,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`, like slice indexing does.
    #[inline(always)]
    pub fn at(&self, index: usize) -> C::Item<'a> {
        (self.slot)(self.container, index)
    }

    pub fn container(&self) -> &'a C {
        self.container
    }
}

impl<'a, C: Container + ?Sized + 'a> Clone for Indexer<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C: Container + ?Sized + 'a> Copy for Indexer<'a, C> {}

/// Capability of a concrete container, tagged with what the engine needs to exploit it.
pub enum Access<'a, C: Container + ?Sized + 'a> {
    Indexed(Indexer<'a, C>),
    Sequential(&'a C),
}

impl<'a, C: Container + ?Sized + 'a> Access<'a, C> {
    pub fn capability(&self) -> Capability {
        match self {
            Access::Indexed(_) => Capability::Indexed,
            Access::Sequential(_) => Capability::SequentialOnly,
        }
    }
}

/// Traversal strategy chosen for a single aggregate operation.
pub enum Plan<'a, C: Container + ?Sized + 'a> {
    /// Direct slot-by-slot traversal of a small indexed container.
    Indexed(Indexer<'a, C>),
    /// General cursor-driven loop.
    Cursor(C::Cursor<'a>),
}

/// Classifies a container by the access pattern of its type.
pub fn classify<C: Container + ?Sized>(container: &C) -> Capability {
    container.access().capability()
}

/// Picks the traversal plan for an aggregate operation over `container`.
pub fn plan<C: Container + ?Sized>(container: &C) -> Plan<'_, C> {
    match container.access() {
        Access::Indexed(indexer) if indexer.len() <= FAST_PATH_THRESHOLD => {
            log::trace!("Indexed plan for {} elements", indexer.len());
            Plan::Indexed(indexer)
        }
        Access::Indexed(indexer) => {
            log::trace!(
                "Cursor plan for {} elements (above the fast path threshold)",
                indexer.len()
            );
            Plan::Cursor(container.cursor())
        }
        Access::Sequential(sequential) => {
            log::trace!("Cursor plan for a sequential-only container");
            Plan::Cursor(sequential.cursor())
        }
    }
}
