mod syntax_tree_pool_tests;
