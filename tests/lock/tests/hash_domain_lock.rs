//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. All domain byte strings are unique (prevents domain collision)
//! 2. All domains are null-terminated and follow `SPACECUT::*::V1\0`
//! 3. Digests of equal documents agree and differ across domains

use spacecut_kernel::hash::{canonical_hash, DOMAIN_FORMULA, DOMAIN_TREE_NODE};
use spacecut_search::formula::Formula;
use spacecut_search::smtlib::SmtDocument;

const ALL: &[&[u8]] = &[DOMAIN_TREE_NODE, DOMAIN_FORMULA];

#[test]
fn hash_domains_are_unique() {
    for (i, a) in ALL.iter().enumerate() {
        for b in &ALL[i + 1..] {
            assert_ne!(a, b, "duplicate domain bytes");
        }
    }
}

#[test]
fn hash_domains_follow_naming_convention() {
    for domain in ALL {
        let text = std::str::from_utf8(domain).expect("domain is ASCII");
        assert!(text.ends_with("::V1\0"), "{text:?} is not versioned and null-terminated");
        assert!(text.starts_with("SPACECUT::"), "{text:?} lacks the SPACECUT prefix");
        assert_eq!(text.matches('\0').count(), 1);
    }
}

#[test]
fn document_digest_is_domain_separated() {
    let doc = SmtDocument::new(vec!["a".into()], Formula::atom("a").negate());
    let text = doc.to_string();
    assert_eq!(doc.digest(), canonical_hash(DOMAIN_FORMULA, text.as_bytes()));
    assert_ne!(doc.digest(), canonical_hash(DOMAIN_TREE_NODE, text.as_bytes()));
    assert_eq!(doc.digest().hex_digest().len(), 64);
}
