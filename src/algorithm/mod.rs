/// Choice between the meanings of a multi-word image
pub mod disambiguation;
/// Round-robin character interleaving
pub mod interleave;
/// Exhaustive distinct-permutation search
pub mod permutation;
/// Sequential first-occurrence letter removal
pub mod reduction;
/// Word resolution engine and strategy search
pub mod resolver;
