use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields:
/// - rule_id
/// - partition
/// - resource id (if present)
///
/// Severity and message are deliberately excluded so a resource keeps its
/// fingerprint when it flips between passing and failing.
pub fn fingerprint_for_finding(rule_id: &str, partition: &str, resource: Option<&str>) -> String {
    let mut parts = vec![rule_id, partition];
    if let Some(r) = resource {
        parts.push(r);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_and_hex_encoded() {
        let a = fingerprint_for_finding("r", "us-central1", Some("projects/p/clusters/c"));
        let b = fingerprint_for_finding("r", "us-central1", Some("projects/p/clusters/c"));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn identity_fields_discriminate() {
        let base = fingerprint_for_finding("r", "us-central1", Some("x"));
        assert_ne!(base, fingerprint_for_finding("r", "us-east1", Some("x")));
        assert_ne!(base, fingerprint_for_finding("other", "us-central1", Some("x")));
        assert_ne!(base, fingerprint_for_finding("r", "us-central1", None));
    }
}
