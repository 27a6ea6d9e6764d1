use crate::DomainError;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

/// Normalize a name to its fully-qualified, lower-case form.
///
/// `"Foo.Example.com"` and `"foo.example.com."` both become
/// `"foo.example.com."`. The empty name is the root, `"."`.
pub fn fqdn(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." {
        return ".".to_string();
    }

    let mut normalized = trimmed.to_ascii_lowercase();
    if !normalized.ends_with('.') {
        normalized.push('.');
    }
    normalized
}

/// Check that `name` is a syntactically valid DNS name in presentation form.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    let normalized = fqdn(name);
    if normalized == "." {
        return Ok(());
    }

    // wire length: one length octet per label plus the terminating root label
    if normalized.len() + 1 > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "{} exceeds {} octets",
            name, MAX_NAME_LEN
        )));
    }

    let without_root = &normalized[..normalized.len() - 1];
    for label in without_root.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "{} contains an empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} octets",
                label, MAX_LABEL_LEN
            )));
        }
        if !label
            .bytes()
            .all(|b| b.is_ascii_graphic() && b != b'\\' && b != b'/')
        {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' contains invalid characters",
                label
            )));
        }
    }

    Ok(())
}
