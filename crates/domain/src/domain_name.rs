use super::WireError;

pub const MAX_LABEL_LEN: usize = 63;
/// Maximum encoded length of a name, terminator included (RFC 1035 §2.3.4).
pub const MAX_NAME_WIRE_LEN: usize = 255;

/// Strips a single trailing dot, so `example.com.` and `example.com` compare
/// and encode identically.
pub fn normalize_domain_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Checks that `name` can be encoded as a query name: non-empty ASCII,
/// dot-separated labels of 1 to 63 bytes, at most 255 bytes on the wire.
pub fn validate_domain_name(name: &str) -> Result<(), WireError> {
    let name = normalize_domain_name(name);

    if name.is_empty() {
        return Err(WireError::MalformedName("empty domain name".to_string()));
    }
    if !name.is_ascii() {
        return Err(WireError::MalformedName(format!(
            "'{}' contains non-ASCII characters",
            name
        )));
    }

    let mut wire_len = 1;
    for label in name.split('.') {
        if label.is_empty() {
            return Err(WireError::MalformedName(format!(
                "'{}' contains an empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(WireError::MalformedName(format!(
                "label '{}' is {} bytes, limit is {}",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }
        wire_len += label.len() + 1;
    }

    if wire_len > MAX_NAME_WIRE_LEN {
        return Err(WireError::MalformedName(format!(
            "'{}' encodes to {} bytes, limit is {}",
            name, wire_len, MAX_NAME_WIRE_LEN
        )));
    }

    Ok(())
}

/// DNS names compare ASCII case-insensitively; a trailing dot is ignored.
pub fn names_equal(a: &str, b: &str) -> bool {
    normalize_domain_name(a).eq_ignore_ascii_case(normalize_domain_name(b))
}
