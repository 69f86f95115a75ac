// core/tests/matching_properties.rs
//
// Engine-level properties checked against a small Cyrillic table:
// - every scan makes progress
// - longer registered sources win over their prefixes
// - unmatched bytes pass through one at a time
// - duplicate sources: last insert wins
// - chunked streaming agrees with whole-buffer scanning

use std::io::{Read, Write};
use std::sync::Arc;

use translit_core::{Config, Matcher, Rule, Transliterator, Trie};

fn table() -> Vec<Rule> {
    [
        ("а", "a"),
        ("б", "b"),
        ("в", "v"),
        ("з", "z"),
        ("г", "h"),
        ("и", "y"),
        ("ї", "i"),
        ("К", "K"),
        ("я", "ia"),
        ("ая", "aia"),
        ("зг", "zgh"),
        ("'", ""),
    ]
    .into_iter()
    .map(|(s, r)| Rule::new(s, r))
    .collect()
}

fn inputs() -> Vec<&'static str> {
    vec![
        "",
        "Київ",
        "ая",
        "а я",
        "зга'я",
        "hello, world",
        "Zz 123 \t\n",
        "аааяяя",
        "зззгггаяая'",
    ]
}

#[test]
fn scan_always_consumes_at_least_one_byte() {
    let trie = Trie::from_rules(table());
    let m = Matcher::new(&trie);
    for input in inputs() {
        let bytes = input.as_bytes();
        for pos in 0..bytes.len() {
            let step = m.scan(bytes, pos);
            assert!(step.consumed >= 1, "input={:?} pos={}", input, pos);
            assert!(pos + step.consumed <= bytes.len());
        }
    }
}

#[test]
fn longest_match_beats_prefix() {
    let trie = Trie::from_rules(table());
    let m = Matcher::new(&trie);
    let step = m.scan("ая".as_bytes(), 0);
    assert_eq!(step.output, b"aia");
    assert_eq!(step.consumed, 4);
    assert_eq!(m.transliterate("ая".as_bytes()), b"aia".to_vec());
}

#[test]
fn ascii_passes_through() {
    let trie = Trie::from_rules(table());
    let m = Matcher::new(&trie);
    for b in 0u8..0x80 {
        if b == b'\'' {
            continue;
        }
        let one = [b];
        let step = m.scan(&one, 0);
        assert_eq!(step.output, &one[..]);
        assert_eq!(step.consumed, 1);
        assert!(!step.matched);
    }
}

#[test]
fn bytes_outside_root_are_identity() {
    let trie = Trie::from_rules(table());
    let m = Matcher::new(&trie);
    let input: Vec<u8> = (0u8..=255)
        .filter(|&b| trie.lookup_child(Trie::ROOT, b).is_none())
        .collect();
    assert!(!input.is_empty());
    assert_eq!(m.transliterate(&input), input);
}

#[test]
fn duplicate_insert_overwrites() {
    let mut trie = Trie::new();
    trie.insert("б".as_bytes(), b"b");
    trie.insert("б".as_bytes(), b"B");
    let m = Matcher::new(&trie);
    assert_eq!(m.transliterate("бб".as_bytes()), b"BB".to_vec());
}

#[test]
fn scan_is_repeatable() {
    let trie = Trie::from_rules(table());
    let m = Matcher::new(&trie);
    let input = "зга'яКиїв".as_bytes();
    for pos in 0..input.len() {
        let first = m.scan(input, pos);
        for _ in 0..3 {
            assert_eq!(m.scan(input, pos), first);
        }
    }
}

#[test]
fn reader_agrees_with_whole_buffer() {
    let trie = Arc::new(Trie::from_rules(table()));
    for input in inputs() {
        let expected = Matcher::new(&trie).transliterate(input.as_bytes());
        for size in 1..=8 {
            let config = Config {
                buffer_size: size,
                ..Config::default()
            };
            let t = Transliterator::with_config(trie.clone(), config);
            let mut out = Vec::new();
            t.reader(input.as_bytes()).read_to_end(&mut out).unwrap();
            assert_eq!(out, expected, "input={:?} buffer_size={}", input, size);
        }
    }
}

#[test]
fn writer_agrees_with_whole_buffer_byte_by_byte() {
    let t = Transliterator::from_rules(table());
    for input in inputs() {
        let expected = t.transliterate_bytes(input.as_bytes());
        let mut w = t.writer(Vec::new());
        for b in input.as_bytes() {
            w.write_all(std::slice::from_ref(b)).unwrap();
        }
        assert_eq!(w.finish().unwrap(), expected, "input={:?}", input);
    }
}

#[test]
fn compiled_trie_scans_like_the_original() {
    let trie = Trie::from_rules(table());
    let back = Trie::from_bincode(&trie.to_bincode().unwrap()).unwrap();
    for input in inputs() {
        assert_eq!(
            Matcher::new(&back).transliterate(input.as_bytes()),
            Matcher::new(&trie).transliterate(input.as_bytes()),
        );
    }
}
