// core/src/matcher.rs
//
// Longest-match scanner over a built `Trie`.
//
// A scan walks the trie from the root along the input bytes starting at a
// given position and remembers the deepest node that carries a value. When
// the walk dead-ends, that value is emitted; if no value was seen, the byte
// at the position passes through unchanged. Each call consumes at least one
// byte and keeps no state between calls.

use crate::trie::Trie;

/// Outcome of a single scan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan<'a> {
    /// Bytes to emit. Borrows either a trie value or the passed-through input byte.
    pub output: &'a [u8],
    /// Number of input bytes covered by `output`; always at least 1.
    pub consumed: usize,
    /// `false` when the byte passed through without a rule.
    pub matched: bool,
}

/// Read-only longest-match view over a trie.
///
/// Matchers are `Copy` and any number of them can scan the same trie at once.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'t> {
    trie: &'t Trie,
}

impl<'t> Matcher<'t> {
    pub fn new(trie: &'t Trie) -> Self {
        Self { trie }
    }

    pub fn trie(&self) -> &'t Trie {
        self.trie
    }

    /// Find the longest rule matching `input` at `position`.
    ///
    /// The end of `input` is treated as the end of the stream.
    ///
    /// # Panics
    /// Panics if `position >= input.len()`.
    ///
    /// # Example
    /// ```
    /// use translit_core::{Matcher, Rule, Trie};
    ///
    /// let trie = Trie::from_rules(vec![
    ///     Rule::new("а", "a"),
    ///     Rule::new("ая", "aia"),
    /// ]);
    /// let m = Matcher::new(&trie);
    ///
    /// let input = "ая!".as_bytes();
    /// let step = m.scan(input, 0);
    /// assert_eq!(step.output, b"aia");
    /// assert_eq!(step.consumed, 4);
    ///
    /// let step = m.scan(input, 4);
    /// assert_eq!(step.output, b"!");
    /// assert!(!step.matched);
    /// ```
    pub fn scan<'a>(&self, input: &'a [u8], position: usize) -> Scan<'a>
    where
        't: 'a,
    {
        let (best, _) = self.walk(input, position);
        self.finish(input, position, best)
    }

    /// Streaming variant of [`Matcher::scan`].
    ///
    /// Returns `None` when the walk ran into the end of `input` on a node
    /// that still has children and `at_eof` is false: more input could turn
    /// a shorter match (or a passthrough) into a longer one, so no decision
    /// is made yet. With `at_eof` set the result always equals `scan`.
    ///
    /// # Panics
    /// Panics if `position >= input.len()`.
    pub fn scan_partial<'a>(&self, input: &'a [u8], position: usize, at_eof: bool) -> Option<Scan<'a>>
    where
        't: 'a,
    {
        let (best, open) = self.walk(input, position);
        if open && !at_eof {
            return None;
        }
        Some(self.finish(input, position, best))
    }

    /// Transliterate a complete stream held in one buffer.
    pub fn transliterate(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        let mut pos = 0;
        while pos < input.len() {
            let step = self.scan(input, pos);
            out.extend_from_slice(step.output);
            pos += step.consumed;
        }
        out
    }

    // Returns the deepest `(value, length)` seen and whether the walk stopped
    // at the end of `input` with the trie still open below it.
    fn walk(&self, input: &[u8], position: usize) -> (Option<(&'t [u8], usize)>, bool) {
        assert!(
            position < input.len(),
            "scan position {} out of bounds for input of length {}",
            position,
            input.len()
        );

        let trie = self.trie;
        let mut current = Trie::ROOT;
        let mut best = None;
        let mut walked = 0;

        while position + walked < input.len() {
            let Some(child) = trie.lookup_child(current, input[position + walked]) else {
                return (best, false);
            };
            current = child;
            walked += 1;
            if let Some(value) = trie.value(current) {
                best = Some((value, walked));
            }
        }

        (best, trie.has_children(current))
    }

    fn finish<'a>(&self, input: &'a [u8], position: usize, best: Option<(&'t [u8], usize)>) -> Scan<'a>
    where
        't: 'a,
    {
        match best {
            Some((output, consumed)) => Scan {
                output,
                consumed,
                matched: true,
            },
            None => Scan {
                output: &input[position..position + 1],
                consumed: 1,
                matched: false,
            },
        }
    }
}
