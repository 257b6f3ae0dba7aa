use crate::SourcePosition;
use crate::syntax_tree::SyntaxNodeType;
use crate::syntax_tree::SyntaxTreePool;

#[test]
fn released_trees_are_reset_and_reused() {
    let pool = SyntaxTreePool::new();
    let first_generation = {
        let mut tree = pool.acquire();
        let root = tree.root();
        tree.append_child(root, SyntaxNodeType::Document, SourcePosition::default());
        assert_eq!(tree.len(), 2);
        tree.generation()
    };
    assert_eq!(pool.retained_count(), 1);

    let tree = pool.acquire();
    assert_eq!(pool.retained_count(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.generation(), first_generation + 1);
}

#[test]
fn pool_retains_at_most_max_retained() {
    let pool = SyntaxTreePool::with_max_retained(2);
    let trees: Vec<_> = (0..5).map(|_| pool.acquire()).collect();
    assert_eq!(pool.retained_count(), 0);

    drop(trees);
    assert_eq!(pool.retained_count(), 2);
}

#[test]
fn into_inner_detaches_from_pool() {
    let pool = SyntaxTreePool::new();
    let mut tree = pool.acquire().into_inner();
    let root = tree.root();
    tree.append_child(root, SyntaxNodeType::Document, SourcePosition::default());

    assert_eq!(pool.retained_count(), 0);
    assert_eq!(tree.len(), 2);
}

#[test]
fn pool_is_shareable_across_threads() {
    let pool = SyntaxTreePool::with_max_retained(4);
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let mut tree = pool.acquire();
                let root = tree.root();
                tree.append_child(root, SyntaxNodeType::Document, SourcePosition::default());
                assert_eq!(tree.len(), 2);
            });
        }
    });
    assert!(pool.retained_count() <= 4);
    assert!(pool.retained_count() >= 1);
}
