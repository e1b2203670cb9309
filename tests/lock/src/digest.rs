//! Canonical hashing of traversal output.
//!
//! A traversal trace is the concatenation of the canonical bytes of every
//! value it yielded, hashed with SHA-256 under a domain prefix. Two runs are
//! considered identical exactly when their digests are.

use sha2::{Digest, Sha256};

/// Domain prefix for traversal trace digests.
pub const DOMAIN_TRAVERSAL_TRACE: &[u8] = b"LAZYTREE::TRAVERSAL_TRACE::V1\0";

/// Canonical byte encoding of a yielded value.
pub trait TraceBytes {
    /// Append this value's canonical bytes to `out`.
    fn append_trace_bytes(&self, out: &mut Vec<u8>);
}

impl TraceBytes for f64 {
    /// IEEE 754 bits, little-endian.
    fn append_trace_bytes(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_bits().to_le_bytes());
    }
}

impl TraceBytes for u64 {
    fn append_trace_bytes(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl<A: TraceBytes, B: TraceBytes> TraceBytes for (A, B) {
    fn append_trace_bytes(&self, out: &mut Vec<u8>) {
        self.0.append_trace_bytes(out);
        self.1.append_trace_bytes(out);
    }
}

impl<T: TraceBytes> TraceBytes for Vec<T> {
    /// Length (u64, little-endian) followed by the elements.
    fn append_trace_bytes(&self, out: &mut Vec<u8>) {
        (self.len() as u64).append_trace_bytes(out);
        for value in self {
            value.append_trace_bytes(out);
        }
    }
}

/// `"sha256:" + hex(sha256(domain || data))`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// Digest of a traversal's yielded values, in order.
pub fn trace_digest<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: TraceBytes,
{
    let mut bytes = Vec::new();
    for value in values {
        value.append_trace_bytes(&mut bytes);
    }
    canonical_hash(DOMAIN_TRAVERSAL_TRACE, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_plain_sha256() {
        assert_eq!(
            canonical_hash(b"", b""),
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn domain_prefix_is_null_terminated_and_separates() {
        assert!(DOMAIN_TRAVERSAL_TRACE.ends_with(&[0]));
        assert_ne!(
            canonical_hash(DOMAIN_TRAVERSAL_TRACE, b"x"),
            canonical_hash(b"", b"x")
        );
    }

    #[test]
    fn trace_digest_is_order_sensitive() {
        assert_ne!(trace_digest([1.0f64, 0.5]), trace_digest([0.5f64, 1.0]));
        assert_eq!(trace_digest([1.0f64, 0.5]), trace_digest(vec![1.0f64, 0.5]));
    }

    #[test]
    fn bundles_are_length_prefixed() {
        // [[a], [b]] and [[a, b]] carry the same values but different shapes.
        let split = trace_digest(vec![vec![1u64], vec![2u64]]);
        let joined = trace_digest(vec![vec![1u64, 2u64]]);
        assert_ne!(split, joined);
    }
}
