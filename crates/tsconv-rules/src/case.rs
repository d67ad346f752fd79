//! Identifier casing predicates.
//!
//! ASCII-only, matching the conventions TypeScript style guides use for
//! file and type names.

/// `^[a-z][a-zA-Z0-9]*$`
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `^[a-z][a-z0-9-]*[a-z0-9]$`
#[must_use]
pub fn is_kebab_case(name: &str) -> bool {
    let bytes = name.as_bytes();
    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    bytes.len() >= 2
        && first.is_ascii_lowercase()
        && (last.is_ascii_lowercase() || last.is_ascii_digit())
        && bytes
            .iter()
            .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// `^[A-Z][a-zA-Z0-9]*$`
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `^I[A-Z][a-zA-Z0-9]*$`
#[must_use]
pub fn is_interface_name(name: &str) -> bool {
    name.strip_prefix('I').is_some_and(is_pascal_case)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case() {
        assert!(is_camel_case("userService"));
        assert!(is_camel_case("a"));
        assert!(is_camel_case("index2"));
        assert!(!is_camel_case("UserService"));
        assert!(!is_camel_case("user-service"));
        assert!(!is_camel_case("user_service"));
        assert!(!is_camel_case(""));
    }

    #[test]
    fn kebab_case() {
        assert!(is_kebab_case("user-service"));
        assert!(is_kebab_case("ab"));
        assert!(is_kebab_case("v2-api"));
        assert!(!is_kebab_case("a"));
        assert!(!is_kebab_case("user-"));
        assert!(!is_kebab_case("-user"));
        assert!(!is_kebab_case("User-service"));
        assert!(!is_kebab_case("user_service"));
        assert!(!is_kebab_case(""));
    }

    #[test]
    fn pascal_case() {
        assert!(is_pascal_case("UserService"));
        assert!(is_pascal_case("A"));
        assert!(!is_pascal_case("userService"));
        assert!(!is_pascal_case("User_Service"));
        assert!(!is_pascal_case(""));
    }

    #[test]
    fn interface_name() {
        assert!(is_interface_name("IUser"));
        assert!(is_interface_name("IHttpClient2"));
        assert!(!is_interface_name("User"));
        assert!(!is_interface_name("Iuser"));
        assert!(!is_interface_name("I"));
        assert!(!is_interface_name("iUser"));
    }
}
