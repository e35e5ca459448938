// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., A_K7NP3X for advertisements)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - ~1 billion combinations per entity type (32^6)
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// Job advertisement (A_)
    Advertisement,
    /// Eshop order (O_)
    Order,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Advertisement => "A",
            EntityPrefix::Order => "O",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
///
/// # Example
/// ```ignore
/// let ad_id = generate_id(EntityPrefix::Advertisement);
/// // Returns something like "A_K7NP3X"
/// ```
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

/// Check whether a string is a well-formed ID for the given entity type.
/// Accepts lowercase letters since Crockford Base32 is case-insensitive.
pub fn is_valid_id(id: &str, prefix: EntityPrefix) -> bool {
    let expected_prefix = format!("{}_", prefix.as_str());
    let Some(random_part) = id.strip_prefix(&expected_prefix) else {
        return false;
    };
    random_part.len() == 6
        && random_part
            .chars()
            .all(|c| CROCKFORD_ALPHABET.contains(&(c.to_ascii_uppercase() as u8)))
}

// ============================================================================
// Convenience functions for each entity type
// ============================================================================

/// Generate an Advertisement ID (A_XXXXXX)
pub fn generate_advertisement_id() -> String {
    generate_id(EntityPrefix::Advertisement)
}

/// Generate an Order ID (O_XXXXXX)
pub fn generate_order_id() -> String {
    generate_id(EntityPrefix::Order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_format() {
        let ad_id = generate_advertisement_id();
        assert!(ad_id.starts_with("A_"));
        assert_eq!(ad_id.len(), 8); // "A_" + 6 chars

        let order_id = generate_order_id();
        assert!(order_id.starts_with("O_"));
        assert_eq!(order_id.len(), 8);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let id = generate_advertisement_id();
        let random_part = &id[2..]; // Skip "A_"

        for c in random_part.chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }

        // Verify no ambiguous characters
        assert!(!random_part.contains('I'));
        assert!(!random_part.contains('L'));
        assert!(!random_part.contains('O'));
        assert!(!random_part.contains('U'));
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            let id = generate_advertisement_id();
            assert!(ids.insert(id), "Duplicate ID generated");
        }
    }

    #[test]
    fn test_is_valid_id() {
        assert!(is_valid_id("A_K7NP3X", EntityPrefix::Advertisement));
        assert!(is_valid_id("A_k7np3x", EntityPrefix::Advertisement));
        assert!(is_valid_id(&generate_order_id(), EntityPrefix::Order));

        assert!(!is_valid_id("A_K7NP3", EntityPrefix::Advertisement)); // too short
        assert!(!is_valid_id("A_K7NP3XY", EntityPrefix::Advertisement)); // too long
        assert!(!is_valid_id("O_K7NP3X", EntityPrefix::Advertisement)); // wrong prefix
        assert!(!is_valid_id("A_K7NPIL", EntityPrefix::Advertisement)); // ambiguous chars
        assert!(!is_valid_id("K7NP3X", EntityPrefix::Advertisement)); // no prefix
    }
}
