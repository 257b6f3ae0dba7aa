use std::ops::Deref;
use std::ops::DerefMut;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::syntax_tree::SyntaxTree;

const DEFAULT_MAX_RETAINED: usize = 64;

/// A thread-safe free list of [`SyntaxTree`]s.
///
/// [`acquire()`](Self::acquire) hands out a [`PooledSyntaxTree`] guard.
/// Dropping the guard resets the tree and returns its storage to the pool,
/// whichever way the owning scope exits.
///
/// ```rust
/// use libquerydoc_parser::GraphQLParser;
/// use libquerydoc_parser::SourceText;
/// use libquerydoc_parser::syntax_tree::SyntaxTreePool;
///
/// let pool = SyntaxTreePool::new();
/// let source = SourceText::new("{ hero { name } }");
/// {
///     let tree = GraphQLParser::new(&source).parse_pooled(&pool).unwrap();
///     assert!(tree.document().is_some());
/// }
/// assert_eq!(pool.retained_count(), 1);
/// ```
#[derive(Debug)]
pub struct SyntaxTreePool {
    free: Mutex<Vec<SyntaxTree>>,
    max_retained: usize,
}

impl SyntaxTreePool {
    pub fn new() -> Self {
        Self::with_max_retained(DEFAULT_MAX_RETAINED)
    }

    /// A pool that keeps at most `max_retained` idle trees; trees released
    /// beyond that are dropped.
    pub fn with_max_retained(max_retained: usize) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            max_retained,
        }
    }

    /// Takes an idle tree from the pool (or allocates a new one).
    pub fn acquire(&self) -> PooledSyntaxTree<'_> {
        let recycled = self.lock_free_list().pop();
        let reused = recycled.is_some();
        let tree = recycled.unwrap_or_default();
        log::trace!(
            "acquired syntax tree (generation {}, reused: {reused})",
            tree.generation(),
        );
        PooledSyntaxTree {
            tree: Some(tree),
            pool: self,
        }
    }

    /// Number of idle trees currently held.
    pub fn retained_count(&self) -> usize {
        self.lock_free_list().len()
    }

    fn release(&self, mut tree: SyntaxTree) {
        tree.reset();
        let mut free = self.lock_free_list();
        if free.len() < self.max_retained {
            log::trace!("released syntax tree (generation {})", tree.generation());
            free.push(tree);
        }
    }

    /// A panic while holding the lock cannot leave the list itself in a
    /// broken state, so a poisoned lock is simply recovered.
    fn lock_free_list(&self) -> std::sync::MutexGuard<'_, Vec<SyntaxTree>> {
        self.free.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SyntaxTreePool {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`SyntaxTree`] on loan from a [`SyntaxTreePool`].
///
/// Derefs to the tree. Returned to the pool on drop unless detached with
/// [`into_inner()`](Self::into_inner).
#[derive(Debug)]
pub struct PooledSyntaxTree<'pool> {
    // Always `Some` until drop or `into_inner`.
    tree: Option<SyntaxTree>,
    pool: &'pool SyntaxTreePool,
}

impl PooledSyntaxTree<'_> {
    /// Detaches the tree from the pool; it will not be recycled.
    pub fn into_inner(mut self) -> SyntaxTree {
        self.tree.take().unwrap_or_default()
    }
}

impl Deref for PooledSyntaxTree<'_> {
    type Target = SyntaxTree;

    fn deref(&self) -> &SyntaxTree {
        match &self.tree {
            Some(tree) => tree,
            None => unreachable!("PooledSyntaxTree used after release"),
        }
    }
}

impl DerefMut for PooledSyntaxTree<'_> {
    fn deref_mut(&mut self) -> &mut SyntaxTree {
        match &mut self.tree {
            Some(tree) => tree,
            None => unreachable!("PooledSyntaxTree used after release"),
        }
    }
}

impl Drop for PooledSyntaxTree<'_> {
    fn drop(&mut self) {
        if let Some(tree) = self.tree.take() {
            self.pool.release(tree);
        }
    }
}
