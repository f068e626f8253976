//! URL mount-prefix normalization.

/// Canonicalize a URL mount prefix: a leading and a trailing `/` are
/// guaranteed, and never doubled. Idempotent.
pub fn normalize(root: &str) -> String {
    let mut out = String::with_capacity(root.len() + 2);
    if !root.starts_with('/') {
        out.push('/');
    }
    out.push_str(root);
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}
