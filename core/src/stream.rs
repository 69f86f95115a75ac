//! Streaming host around the matcher.
//!
//! `Transliterator` owns a shared trie and feeds it input in chunks. The only
//! subtle part is the chunk edge: a match may continue into bytes that have
//! not been read yet, so any undecided tail of a chunk is carried over and
//! rescanned together with the next one. Only at end of stream is a match
//! running into the edge taken as final.
use std::io::{self, Read, Write};
use std::sync::Arc;

use tracing::trace;

use crate::error::Result;
use crate::matcher::Matcher;
use crate::rules::Rule;
use crate::trie::Trie;
use crate::Config;

/// Transliterates byte streams with a shared rule trie.
///
/// Cloning is cheap; clones share the trie.
///
/// # Example
/// ```
/// use translit_core::{Rule, Transliterator};
///
/// let t = Transliterator::from_rules(vec![
///     Rule::new("ш", "sh"),
///     Rule::new("щ", "shch"),
///     Rule::new("о", "o"),
/// ]);
/// assert_eq!(t.transliterate("шощо"), "shoshcho");
/// ```
#[derive(Debug, Clone)]
pub struct Transliterator {
    trie: Arc<Trie>,
    config: Config,
}

impl Transliterator {
    pub fn new(trie: Arc<Trie>) -> Self {
        Self::with_config(trie, Config::default())
    }

    pub fn with_config(trie: Arc<Trie>, config: Config) -> Self {
        Self { trie, config }
    }

    pub fn from_rules<I: IntoIterator<Item = Rule>>(rules: I) -> Self {
        Self::new(Arc::new(Trie::from_rules(rules)))
    }

    /// Build from a base table followed by the override rules in `config`.
    pub fn from_config<I: IntoIterator<Item = Rule>>(base: I, config: &Config) -> Result<Self> {
        let overrides = config.parsed_rules()?;
        let trie = Trie::from_rules(base.into_iter().chain(overrides));
        Ok(Self::with_config(Arc::new(trie), config.clone()))
    }

    pub fn trie(&self) -> &Arc<Trie> {
        &self.trie
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.trie)
    }

    /// Append the output for as many leading bytes of `src` as can be
    /// decided and return how many were consumed.
    ///
    /// Bytes that could still be the start of a longer match are left
    /// unconsumed unless `at_eof` is set, in which case all of `src` is
    /// consumed.
    pub fn transform(&self, dst: &mut Vec<u8>, src: &[u8], at_eof: bool) -> usize {
        let m = self.matcher();
        let mut pos = 0;
        while pos < src.len() {
            match m.scan_partial(src, pos, at_eof) {
                Some(step) => {
                    dst.extend_from_slice(step.output);
                    pos += step.consumed;
                }
                None => break,
            }
        }
        pos
    }

    pub fn transliterate_bytes(&self, input: &[u8]) -> Vec<u8> {
        self.matcher().transliterate(input)
    }

    /// Transliterate a string, NFC-normalizing it first when configured.
    ///
    /// Rules may in principle split multi-byte characters; any invalid UTF-8
    /// in the output is replaced with U+FFFD.
    pub fn transliterate(&self, input: &str) -> String {
        let out = if self.config.normalize_nfc {
            self.transliterate_bytes(crate::utils::normalize_nfc(input).as_bytes())
        } else {
            self.transliterate_bytes(input.as_bytes())
        };
        match String::from_utf8(out) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    /// Transliterate one line read from a byte stream.
    ///
    /// Valid UTF-8 is NFC-normalized first when configured. Anything else is
    /// matched as raw bytes, so invalid sequences pass through unchanged.
    pub fn transliterate_line(&self, line: &[u8]) -> Vec<u8> {
        if self.config.normalize_nfc {
            if let Ok(s) = std::str::from_utf8(line) {
                return self.transliterate_bytes(crate::utils::normalize_nfc(s).as_bytes());
            }
        }
        self.transliterate_bytes(line)
    }

    pub fn reader<R: Read>(&self, inner: R) -> TranslitReader<R> {
        TranslitReader {
            inner,
            chunk: vec![0u8; self.config.buffer_size.max(1)],
            t: self.clone(),
            pending: Vec::new(),
            out: Vec::new(),
            out_pos: 0,
            eof: false,
        }
    }

    pub fn writer<W: Write>(&self, inner: W) -> TranslitWriter<W> {
        TranslitWriter {
            inner,
            t: self.clone(),
            pending: Vec::new(),
            out: Vec::new(),
        }
    }
}

/// `Read` adapter yielding the transliteration of an inner reader.
pub struct TranslitReader<R> {
    inner: R,
    chunk: Vec<u8>,
    t: Transliterator,
    pending: Vec<u8>,
    out: Vec<u8>,
    out_pos: usize,
    eof: bool,
}

impl<R: Read> TranslitReader<R> {
    pub fn into_inner(self) -> R {
        self.inner
    }

    // Refill `out` until it holds something or the stream is exhausted.
    fn fill(&mut self) -> io::Result<()> {
        while self.out_pos >= self.out.len() {
            self.out.clear();
            self.out_pos = 0;

            if self.eof && self.pending.is_empty() {
                return Ok(());
            }
            if !self.eof {
                let n = match self.inner.read(&mut self.chunk) {
                    Ok(n) => n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if n == 0 {
                    self.eof = true;
                } else {
                    self.pending.extend_from_slice(&self.chunk[..n]);
                }
            }

            let consumed = self.t.transform(&mut self.out, &self.pending, self.eof);
            self.pending.drain(..consumed);
            trace!(
                consumed,
                carried = self.pending.len(),
                produced = self.out.len(),
                "transliteration refill"
            );
        }
        Ok(())
    }
}

impl<R: Read> Read for TranslitReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.fill()?;
        let available = &self.out[self.out_pos..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.out_pos += n;
        Ok(n)
    }
}

/// `Write` adapter transliterating everything written before passing it on.
///
/// Bytes that might still be the start of a longer match are held back
/// until more data arrives; call [`TranslitWriter::finish`] to flush them at
/// end of stream. Dropping the writer without finishing discards them.
pub struct TranslitWriter<W: Write> {
    inner: W,
    t: Transliterator,
    pending: Vec<u8>,
    out: Vec<u8>,
}

impl<W: Write> TranslitWriter<W> {
    /// Flush the held-back tail as end of stream and return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.clear();
        let consumed = self.t.transform(&mut self.out, &self.pending, true);
        debug_assert_eq!(consumed, self.pending.len());
        self.pending.clear();
        self.inner.write_all(&self.out)?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    /// Number of bytes currently held back.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl<W: Write> Write for TranslitWriter<W> {
    /// On error nothing of `buf` is retained, so the call can be retried.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let held = self.pending.len();
        self.pending.extend_from_slice(buf);
        self.out.clear();
        let consumed = self.t.transform(&mut self.out, &self.pending, false);
        if let Err(e) = self.inner.write_all(&self.out) {
            self.pending.truncate(held);
            return Err(e);
        }
        self.pending.drain(..consumed);
        Ok(buf.len())
    }

    /// Flushes the inner writer. Held-back bytes stay pending.
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
