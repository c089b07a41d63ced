//! Automaton - Persistent byte trie for longest-match key scanning
//!
//! Every registered key (a literal glyph or a `:alias:`) is a path of bytes
//! through a 256-way trie. The base vocabulary builds its trie once, in
//! place. Registries then *extend* it by path copying: only the nodes along
//! the inserted key are reallocated, every other subtree stays shared with
//! the original root, and the original root remains valid for anyone still
//! holding it.
//!
//! # Matching
//! - Single left-to-right pass over byte positions
//! - Longest match at each start position (the walk continues past an
//!   intermediate terminal)
//! - No overlap: scanning resumes at the end of the previous match
//! - ASCII case-insensitive: keys are lowercased on insertion and each probe
//!   byte is lowercased at its transition, so byte offsets of the input text
//!   are preserved
//!
//! Only ASCII letters fold. Non-ASCII letters in a key must match exactly:
//! `:café:` matches `:CAFé:` but not `:CAFÉ:`. Full Unicode folding can
//! change a character's byte length, which would break the offsets above.

use std::ops::Range;
use std::sync::Arc;

const FANOUT: usize = 256;

#[derive(Clone)]
struct State {
    next: [Option<Arc<State>>; FANOUT],
    term: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next: std::array::from_fn(|_| None),
            term: false,
        }
    }
}

impl State {
    #[inline]
    fn child(&self, byte: u8) -> Option<&Arc<State>> {
        self.next[byte as usize].as_ref()
    }
}

/// Allocate a fresh chain spelling `rest`, terminal at its tail.
fn chain(rest: &[u8]) -> Arc<State> {
    let mut tail = Arc::new(State {
        term: true,
        ..State::default()
    });
    for &byte in rest.iter().rev() {
        let mut state = State::default();
        state.next[byte as usize] = Some(tail);
        tail = Arc::new(state);
    }
    tail
}

/// Path-copying insert. `state` is never modified.
fn extend_state(state: &State, key: &[u8]) -> Arc<State> {
    let mut copy = state.clone();
    match key.split_first() {
        None => copy.term = true,
        Some((&byte, rest)) => {
            let child = match state.child(byte) {
                Some(existing) => extend_state(existing, rest),
                None => chain(rest),
            };
            copy.next[byte as usize] = Some(child);
        }
    }
    Arc::new(copy)
}

/// In-place insert, used while a trie is still uniquely owned by its builder.
fn insert_in_place(root: &mut Arc<State>, key: &[u8]) -> bool {
    let mut state = Arc::make_mut(root);
    for &byte in key {
        let slot = &mut state.next[byte as usize];
        state = Arc::make_mut(slot.get_or_insert_with(Default::default));
    }
    let fresh = !state.term;
    state.term = true;
    fresh
}

/// Multi-key matcher over a persistent trie.
///
/// Cloning an `Automaton` is cheap: it shares the whole trie.
#[derive(Clone, Default)]
pub struct Automaton {
    root: Arc<State>,
    keys: usize,
}

impl std::fmt::Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton").field("keys", &self.keys).finish()
    }
}

impl Automaton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie over `keys` in one pass. Empty keys are ignored.
    pub fn build<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self::new();
        for key in keys {
            let key = key.as_ref();
            if key.is_empty() {
                continue;
            }
            if insert_in_place(&mut automaton.root, key.to_ascii_lowercase().as_bytes()) {
                automaton.keys += 1;
            }
        }
        automaton
    }

    /// Return a new automaton that also recognizes `key`.
    ///
    /// Allocates one node per byte of `key` plus a new root; everything else
    /// is shared with `self`, which stays usable.
    pub fn extend(&self, key: &str) -> Automaton {
        if key.is_empty() {
            return self.clone();
        }
        let normalized = key.to_ascii_lowercase();
        let fresh = !self.contains_key(&normalized);
        Automaton {
            root: extend_state(&self.root, normalized.as_bytes()),
            keys: self.keys + usize::from(fresh),
        }
    }

    /// Number of distinct keys recognized.
    pub fn len(&self) -> usize {
        self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// True when both automata are the same trie (not merely equal).
    pub fn shares_root(&self, other: &Automaton) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Exact key membership, case-insensitive.
    pub fn contains_key(&self, key: &str) -> bool {
        let mut state = &self.root;
        for byte in key.bytes() {
            match state.child(byte.to_ascii_lowercase()) {
                Some(next) => state = next,
                None => return false,
            }
        }
        !key.is_empty() && state.term
    }

    /// Find all non-overlapping longest matches, left to right.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        let bytes = text.as_bytes();
        let mut spans = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            match self.longest_at(bytes, i) {
                Some(end) => {
                    spans.push(i..end);
                    i = end;
                }
                None => i += 1,
            }
        }
        spans
    }

    /// Quick check if text contains any key
    pub fn contains_any(&self, text: &str) -> bool {
        let bytes = text.as_bytes();
        (0..bytes.len()).any(|i| self.longest_at(bytes, i).is_some())
    }

    /// End of the longest key starting at `start`, if any.
    fn longest_at(&self, bytes: &[u8], start: usize) -> Option<usize> {
        let mut state = &self.root;
        let mut term = None;
        let mut j = start;
        loop {
            if state.term && j > start {
                term = Some(j);
            }
            let Some(&byte) = bytes.get(j) else { break };
            match state.child(byte.to_ascii_lowercase()) {
                Some(next) => state = next,
                None => break,
            }
            j += 1;
        }
        term
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use aho_corasick::{AhoCorasickBuilder, MatchKind};

    fn slices<'a>(text: &'a str, spans: &[Range<usize>]) -> Vec<&'a str> {
        spans.iter().map(|s| &text[s.clone()]).collect()
    }

    /// Count the nodes on `key`'s path in `new` that are not shared with
    /// `old`, asserting that every off-path slot is shared.
    fn fresh_nodes_on_path(old: &Automaton, new: &Automaton, key: &str) -> usize {
        let bytes = key.as_bytes();
        let mut fresh = 0;
        let mut new_state = Some(new.root.clone());
        let mut old_state = Some(old.root.clone());

        for depth in 0..=bytes.len() {
            let n = new_state.expect("extended trie must contain the key path");
            if !old_state.as_ref().is_some_and(|o| Arc::ptr_eq(o, &n)) {
                fresh += 1;
            }
            if let Some(o) = &old_state {
                for slot in 0..FANOUT {
                    if depth < bytes.len() && slot == bytes[depth] as usize {
                        continue;
                    }
                    match (&n.next[slot], &o.next[slot]) {
                        (Some(a), Some(b)) => assert!(Arc::ptr_eq(a, b), "slot {slot} copied at depth {depth}"),
                        (None, None) => {}
                        _ => panic!("slot {slot} diverged at depth {depth}"),
                    }
                }
            }
            if depth == bytes.len() {
                break;
            }
            let byte = bytes[depth] as usize;
            new_state = n.next[byte].clone();
            old_state = old_state.and_then(|o| o.next[byte].clone());
        }
        fresh
    }

    // -------------------------------------------------------------------------
    // Requirement 1: Build and find a single key
    // -------------------------------------------------------------------------
    #[test]
    fn test_build_and_find_single_key() {
        let automaton = Automaton::build([":tophat:"]);
        let text = "wear a :tophat: today";

        assert_eq!(automaton.len(), 1);
        assert_eq!(automaton.find_spans(text), vec![7..15]);
    }

    // -------------------------------------------------------------------------
    // Requirement 2: Longest match wins over a shorter prefix key
    // -------------------------------------------------------------------------
    #[test]
    fn test_longest_match() {
        let automaton = Automaton::build(["pop", "popcorn"]);

        assert_eq!(automaton.find_spans("popcorn"), vec![0..7]);
        assert_eq!(automaton.find_spans("popcor"), vec![0..3]);
    }

    #[test]
    fn test_walks_past_intermediate_terminal() {
        let automaton = Automaton::build(["ab", "abcd"]);

        assert_eq!(automaton.find_spans("abcx"), vec![0..2]);
        assert_eq!(automaton.find_spans("abcd"), vec![0..4]);
        assert_eq!(automaton.find_spans("xabcdab"), vec![1..5, 5..7]);
    }

    // -------------------------------------------------------------------------
    // Requirement 3: No overlap, restart after a match
    // -------------------------------------------------------------------------
    #[test]
    fn test_non_overlap_and_restart() {
        let automaton = Automaton::build([":horse_racing:", ":musical_note:", ":corn:", ":popcorn:"]);
        let text = ":po:popcor:corn:n:";

        let spans = automaton.find_spans(text);
        assert_eq!(spans, vec![10..16]);
        assert_eq!(&text[..10], ":po:popcor");
        assert_eq!(&text[16..], "n:");
    }

    #[test]
    fn test_adjacent_matches() {
        let automaton = Automaton::build([":a:", ":b:"]);
        let text = ":a::b::a:";

        assert_eq!(slices(text, &automaton.find_spans(text)), vec![":a:", ":b:", ":a:"]);
    }

    // -------------------------------------------------------------------------
    // Requirement 4: Case-insensitive matching preserves byte offsets
    // -------------------------------------------------------------------------
    #[test]
    fn test_case_insensitive() {
        let automaton = Automaton::build([":Tada:"]);

        assert_eq!(automaton.find_spans(":TADA: and :tada:"), vec![0..6, 11..17]);
        assert!(automaton.contains_key(":TaDa:"));
    }

    #[test]
    fn test_only_ascii_letters_fold() {
        let automaton = Automaton::build([":café:"]);

        assert_eq!(automaton.find_spans(":CAFé:"), vec![0..7]);
        assert!(automaton.find_spans(":CAFÉ:").is_empty());
        assert!(!automaton.contains_key(":CAFÉ:"));
    }

    #[test]
    fn test_multibyte_glyph_offsets() {
        let automaton = Automaton::build(["🏇"]);
        let text = "a🏇b🏇";

        let spans = automaton.find_spans(text);
        assert_eq!(spans, vec![1..5, 6..10]);
        assert_eq!(slices(text, &spans), vec!["🏇", "🏇"]);
    }

    // -------------------------------------------------------------------------
    // Requirement 5: Edge cases
    // -------------------------------------------------------------------------
    #[test]
    fn test_text_shorter_than_any_key() {
        let automaton = Automaton::build([":smile:"]);
        assert!(automaton.find_spans(":smi").is_empty());
        assert!(automaton.find_spans("").is_empty());
    }

    #[test]
    fn test_empty_keys_are_ignored() {
        let automaton = Automaton::build(["", "x"]);
        assert_eq!(automaton.len(), 1);
        assert!(automaton.extend("").shares_root(&automaton));
        assert_eq!(automaton.find_spans("axb"), vec![1..2]);
    }

    #[test]
    fn test_contains_any() {
        let automaton = Automaton::build([":book:"]);
        assert!(automaton.contains_any("read a :book:"));
        assert!(!automaton.contains_any("read a book"));
    }

    #[test]
    fn test_duplicate_keys_counted_once() {
        let automaton = Automaton::build(["x", "X", "x"]);
        assert_eq!(automaton.len(), 1);
        assert_eq!(automaton.extend("x").len(), 1);
    }

    // -------------------------------------------------------------------------
    // Requirement 6: Extension is persistent
    // -------------------------------------------------------------------------
    #[test]
    fn test_extend_leaves_original_untouched() {
        let base = Automaton::build([":corn:"]);
        let extended = base.extend(":unicorn:");

        assert!(!base.shares_root(&extended));
        assert_eq!(base.find_spans(":unicorn:"), Vec::<Range<usize>>::new());
        assert_eq!(extended.find_spans(":unicorn: :corn:"), vec![0..9, 10..16]);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn test_extend_existing_prefix_becomes_terminal() {
        let base = Automaton::build(["popcorn"]);
        let extended = base.extend("pop");

        assert_eq!(base.find_spans("pop"), Vec::<Range<usize>>::new());
        assert_eq!(extended.find_spans("pop"), vec![0..3]);
        assert_eq!(fresh_nodes_on_path(&base, &extended, "pop"), 4);
    }

    #[test]
    fn test_extend_large_base_allocates_only_the_key_path() {
        let keys: Vec<String> = (0..10_000).map(|i| format!(":k{i:04}:")).collect();
        let base = Automaton::build(&keys);
        let other_holder = base.clone();

        let key = ":zzzz:";
        let extended = base.extend(key);

        // New root plus at most one node per key byte.
        let fresh = fresh_nodes_on_path(&base, &extended, key);
        assert!(fresh - 1 <= key.len(), "allocated {fresh} nodes");
        assert!(other_holder.shares_root(&base));
        assert_eq!(other_holder.find_spans(key), Vec::<Range<usize>>::new());
        assert_eq!(extended.find_spans(":k0042::zzzz:"), vec![0..7, 7..13]);
    }

    // -------------------------------------------------------------------------
    // Requirement 7: Agrees with a reference leftmost-longest matcher
    // -------------------------------------------------------------------------
    #[test]
    fn test_agrees_with_aho_corasick_leftmost_longest() {
        let keys = [":pop:", ":popcorn:", ":corn:", "🍿", "🌽", "ab", "abc", "bcd", ":x:"];
        let texts = [
            ":popcorn::pop::corn:",
            "abcd bcd abcbcd",
            "🍿🌽 :POPCORN: :Corn",
            "::x::x:::",
            "no keys at all",
        ];

        let ours = Automaton::build(keys);
        let reference = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .ascii_case_insensitive(true)
            .build(keys)
            .unwrap();

        for text in texts {
            let expected: Vec<Range<usize>> = reference.find_iter(text).map(|m| m.start()..m.end()).collect();
            assert_eq!(ours.find_spans(text), expected, "text {text:?}");
        }
    }
}
