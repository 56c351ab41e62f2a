// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Aho-Corasick pattern automaton.
//!
//! Nodes live in a flat arena owned by the automaton and refer to each other
//! exclusively through `NodeId` indices, so failure links never create
//! ownership cycles.

use fnv::{FnvHashMap, FnvHashSet};

use super::automaton::PatternId;

/// Index of a node within the automaton's arena.
pub(crate) type NodeId = u32;

/// The root state of the automaton, always at index 0.
pub(crate) const ROOT: NodeId = 0;

/// A single state of the pattern automaton.
///
/// `children` holds the goto transitions, one per distinct character.
/// `failure` points at the state for the longest proper suffix of this
/// node's path that is also a prefix of some pattern; until `build` runs it
/// holds the root as a placeholder. `outputs` is the de-duplicated set of
/// patterns terminating at this state, including those inherited through the
/// failure chain during construction.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// Map of characters to child states
    pub(crate) children: FnvHashMap<char, NodeId>,

    /// Failure transition, resolved during `build`
    pub(crate) failure: NodeId,

    /// Patterns whose occurrence ends exactly at this state
    pub(crate) outputs: FnvHashSet<PatternId>,
}

impl TrieNode {
    /// Creates a new empty state.
    pub(crate) fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            failure: ROOT,
            outputs: FnvHashSet::default(),
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
