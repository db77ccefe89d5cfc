// Inline capacities of small vectors before they spill to the heap.
pub const N_ITEMS_ON_STACK: usize = 16;
pub const N_OPS_IN_TABLE: usize = 8;
pub const N_VARS_ON_STACK: usize = 8;
// Evaluation, printing, and dropping recurse once per level of a tree.
pub const MAX_TREE_DEPTH: usize = 512;
