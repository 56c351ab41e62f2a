// Copyright (c) 2026 Kope Scan Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Core implementation of the Aho-Corasick pattern automaton.

use std::collections::VecDeque;
use std::iter::{Enumerate, FusedIterator};
use std::str::Chars;

use fnv::FnvHashMap;

use super::cancel::ScanCancellation;
use super::error::{AutomatonError, Result};
use super::node::{NodeId, TrieNode, ROOT};

/// How many characters a cancellable scan processes between checks of its
/// cancellation token.
const CANCEL_CHECK_INTERVAL: usize = 512;

/// Opaque handle for a pattern registered with a [`PatternAutomaton`].
///
/// Identifiers are dense and assigned in insertion order; adding the same
/// pattern text twice returns the identifier minted for the first insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternId(u32);

impl PatternId {
    /// Returns the identifier as an array index.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A single match reported by a scan.
///
/// `end` is the zero-based character position (not byte offset) of the last
/// character of the occurrence within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    /// The pattern whose occurrence ends at `end`
    pub pattern: PatternId,

    /// Character position of the final character of the occurrence
    pub end: usize,
}

/// Registered pattern text together with its precomputed character length.
#[derive(Debug)]
struct PatternEntry {
    text: String,
    char_len: usize,
}

/// Multi-pattern string matching automaton.
///
/// Patterns are inserted into a character-keyed trie, then `build` computes
/// failure links breadth-first and folds each state's failure-target outputs
/// into its own output set. A single left-to-right pass over a text then
/// reports every occurrence of every pattern, including overlapping ones,
/// without rescanning.
///
/// The automaton has a two-phase lifecycle: mutation (`add_pattern`) is only
/// legal before `build`, searching only after.
///
/// # Examples
///
/// ```
/// use kope_scan_lib::data_structures::aho_corasick_automaton::PatternAutomaton;
///
/// let mut automaton = PatternAutomaton::new();
/// for pattern in ["he", "she", "his", "hers"] {
///     automaton.add_pattern(pattern).unwrap();
/// }
/// automaton.build().unwrap();
///
/// let events: Vec<_> = automaton
///     .search("ahishers")
///     .unwrap()
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(events.len(), 4);
/// ```
#[derive(Debug)]
pub struct PatternAutomaton {
    /// Arena of states; index 0 is the root
    nodes: Vec<TrieNode>,

    /// Registered patterns, indexed by `PatternId`
    patterns: Vec<PatternEntry>,

    /// Pattern text to identifier, for idempotent insertion
    interned: FnvHashMap<String, PatternId>,

    /// Whether failure links have been computed
    built: bool,
}

impl PatternAutomaton {
    /// Creates an empty automaton containing only the root state.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty automaton with arena capacity reserved for roughly
    /// `estimated_chars` total pattern characters.
    ///
    /// # Arguments
    ///
    /// * `estimated_chars` - Upper bound on the summed length of the patterns
    ///   that will be added
    pub fn with_capacity(estimated_chars: usize) -> Self {
        let mut nodes = Vec::with_capacity(estimated_chars + 1);
        nodes.push(TrieNode::new());
        Self {
            nodes,
            patterns: Vec::new(),
            interned: FnvHashMap::default(),
            built: false,
        }
    }

    /// Registers a pattern and returns its identifier.
    ///
    /// Inserting a pattern that is already registered changes nothing and
    /// returns the existing identifier, so duplicate corpus entries cannot
    /// grow the automaton or double-report matches.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern text; must be non-empty
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::EmptyPattern`] for an empty pattern and
    /// [`AutomatonError::AlreadyBuilt`] once `build` has run.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<PatternId> {
        if self.built {
            return Err(AutomatonError::AlreadyBuilt);
        }
        if pattern.is_empty() {
            return Err(AutomatonError::EmptyPattern);
        }
        if let Some(&existing) = self.interned.get(pattern) {
            return Ok(existing);
        }

        let id = PatternId(self.patterns.len() as u32);
        let mut state = ROOT;
        let mut char_len = 0;
        for c in pattern.chars() {
            char_len += 1;
            let next = self.nodes[state as usize].children.get(&c).copied();
            state = match next {
                Some(child) => child,
                None => {
                    let child = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::new());
                    self.nodes[state as usize].children.insert(c, child);
                    child
                }
            };
        }
        self.nodes[state as usize].outputs.insert(id);

        self.patterns.push(PatternEntry {
            text: pattern.to_string(),
            char_len,
        });
        self.interned.insert(pattern.to_string(), id);
        Ok(id)
    }

    /// Computes failure links and inherited output sets, freezing the
    /// automaton for searching.
    ///
    /// States are visited breadth-first from the root, so every failure
    /// target is fully resolved before any deeper state inherits from it.
    /// Building an automaton with no patterns is legal; every search then
    /// reports nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::AlreadyBuilt`] if called twice.
    pub fn build(&mut self) -> Result<()> {
        if self.built {
            return Err(AutomatonError::AlreadyBuilt);
        }

        let mut queue = VecDeque::new();
        let root_children: Vec<NodeId> =
            self.nodes[ROOT as usize].children.values().copied().collect();
        for child in root_children {
            self.nodes[child as usize].failure = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let edges: Vec<(char, NodeId)> = self.nodes[current as usize]
                .children
                .iter()
                .map(|(&c, &child)| (c, child))
                .collect();

            for (c, child) in edges {
                // Walk the failure chain of the parent until a state with a
                // transition on `c` is found, falling back to the root.
                let mut probe = self.nodes[current as usize].failure;
                let target = loop {
                    if let Some(&next) = self.nodes[probe as usize].children.get(&c) {
                        break next;
                    }
                    if probe == ROOT {
                        break ROOT;
                    }
                    probe = self.nodes[probe as usize].failure;
                };

                self.nodes[child as usize].failure = target;
                if !self.nodes[target as usize].outputs.is_empty() {
                    let inherited: Vec<PatternId> =
                        self.nodes[target as usize].outputs.iter().copied().collect();
                    self.nodes[child as usize].outputs.extend(inherited);
                }
                queue.push_back(child);
            }
        }

        self.built = true;
        Ok(())
    }

    /// Scans `text` and returns a lazy stream of every pattern occurrence.
    ///
    /// The stream borrows both the automaton and the text; no match is
    /// computed before it is demanded. Overlapping occurrences are all
    /// reported. Scanning an empty text yields nothing.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to scan
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::NotBuilt`] if `build` has not run.
    pub fn search<'a, 'b>(&'a self, text: &'b str) -> Result<MatchStream<'a, 'b>> {
        self.stream(text, None)
    }

    /// Scans `text` like [`search`](Self::search), additionally observing a
    /// cancellation token at batch boundaries.
    ///
    /// Once the token reports cancellation the stream yields a single
    /// [`AutomatonError::Cancelled`] and then terminates.
    pub fn search_cancellable<'a, 'b>(
        &'a self,
        text: &'b str,
        cancel: ScanCancellation,
    ) -> Result<MatchStream<'a, 'b>> {
        self.stream(text, Some(cancel))
    }

    fn stream<'a, 'b>(
        &'a self,
        text: &'b str,
        cancel: Option<ScanCancellation>,
    ) -> Result<MatchStream<'a, 'b>> {
        if !self.built {
            return Err(AutomatonError::NotBuilt);
        }
        Ok(MatchStream {
            automaton: self,
            chars: text.chars().enumerate(),
            state: ROOT,
            pending: Vec::new(),
            pending_cursor: 0,
            pending_end: 0,
            cancel,
            chars_since_check: 0,
            finished: false,
        })
    }

    /// Returns `true` once `build` has completed.
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Returns the number of states, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct patterns registered.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Returns the text of a registered pattern.
    pub fn pattern_text(&self, id: PatternId) -> Option<&str> {
        self.patterns.get(id.as_usize()).map(|entry| entry.text.as_str())
    }

    /// Returns the character length of a registered pattern.
    pub fn pattern_char_len(&self, id: PatternId) -> Option<usize> {
        self.patterns.get(id.as_usize()).map(|entry| entry.char_len)
    }
}

impl Default for PatternAutomaton {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the matches of a scan.
///
/// Yields `Ok(MatchEvent)` for every occurrence in character order; events
/// sharing an end position are yielded in ascending `PatternId` order. A
/// cancellable scan whose token fires yields exactly one
/// `Err(AutomatonError::Cancelled)` and then fuses. The iterator is fused
/// either way.
#[derive(Debug)]
pub struct MatchStream<'a, 'b> {
    automaton: &'a PatternAutomaton,
    chars: Enumerate<Chars<'b>>,
    state: NodeId,
    pending: Vec<PatternId>,
    pending_cursor: usize,
    pending_end: usize,
    cancel: Option<ScanCancellation>,
    chars_since_check: usize,
    finished: bool,
}

impl Iterator for MatchStream<'_, '_> {
    type Item = Result<MatchEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.pending_cursor < self.pending.len() {
                let pattern = self.pending[self.pending_cursor];
                self.pending_cursor += 1;
                return Some(Ok(MatchEvent {
                    pattern,
                    end: self.pending_end,
                }));
            }
            if self.finished {
                return None;
            }

            let (position, c) = match self.chars.next() {
                Some(next) => next,
                None => {
                    self.finished = true;
                    return None;
                }
            };

            if let Some(cancel) = &self.cancel {
                self.chars_since_check += 1;
                if self.chars_since_check >= CANCEL_CHECK_INTERVAL {
                    self.chars_since_check = 0;
                    if cancel.is_cancelled() {
                        self.finished = true;
                        return Some(Err(AutomatonError::Cancelled));
                    }
                }
            }

            let automaton = self.automaton;
            let mut state = self.state;
            loop {
                if let Some(&next) = automaton.nodes[state as usize].children.get(&c) {
                    state = next;
                    break;
                }
                if state == ROOT {
                    break;
                }
                state = automaton.nodes[state as usize].failure;
            }
            self.state = state;

            let outputs = &automaton.nodes[state as usize].outputs;
            if !outputs.is_empty() {
                self.pending.clear();
                self.pending.extend(outputs.iter().copied());
                self.pending.sort_unstable();
                self.pending_cursor = 0;
                self.pending_end = position;
            }
        }
    }
}

impl FusedIterator for MatchStream<'_, '_> {}
