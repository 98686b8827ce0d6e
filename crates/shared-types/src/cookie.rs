//! Reading and expiring the legacy client-readable `username` cookie.

use crate::identity::Identity;

/// Cookie the legacy login flow sets with the logged-in username.
pub const USERNAME_COOKIE: &str = "username";

/// Look up `name` in a `document.cookie` style header (`a=1; b=2`).
///
/// The value runs from just after `name=` up to the next `;` or the end of
/// the header. Only whole cookie names match, so `xusername=` is not a hit
/// for `username`. The first occurrence wins when a name repeats; the old
/// JavaScript header returned nothing in that case.
pub fn get_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.trim_start().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Identity implied by the `username` cookie.
pub fn identity_from_cookie_header(cookie_header: &str) -> Identity {
    Identity::from_username(get_cookie(cookie_header, USERNAME_COOKIE))
}

/// Cookie assignment that makes the browser drop `name` immediately.
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; Max-Age=0; path=/", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_last_in_header() {
        assert_eq!(get_cookie("theme=dark; username=alice", "username"), Some("alice"));
    }

    #[test]
    fn test_cookie_followed_by_others() {
        assert_eq!(get_cookie("username=alice; other=X", "username"), Some("alice"));
        assert_eq!(
            get_cookie("a=1; username=bob; other=X", "username"),
            Some("bob")
        );
    }

    #[test]
    fn test_cookie_only_entry() {
        assert_eq!(get_cookie("username=alice", "username"), Some("alice"));
    }

    #[test]
    fn test_cookie_missing() {
        assert_eq!(get_cookie("", "username"), None);
        assert_eq!(get_cookie("theme=dark; lang=en", "username"), None);
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        assert_eq!(get_cookie("xusername=eve", "username"), None);
        assert_eq!(get_cookie("username_hint=eve; username=alice", "username"), Some("alice"));
    }

    #[test]
    fn test_cookie_value_with_equals() {
        assert_eq!(get_cookie("token=a=b=c; username=alice", "token"), Some("a=b=c"));
    }

    #[test]
    fn test_cookie_duplicate_name_first_wins() {
        assert_eq!(get_cookie("username=alice; username=bob", "username"), Some("alice"));
    }

    #[test]
    fn test_identity_from_cookie_header() {
        assert_eq!(
            identity_from_cookie_header("session=abc; username=alice"),
            Identity::Authenticated {
                username: "alice".to_string()
            }
        );
        assert_eq!(identity_from_cookie_header("session=abc"), Identity::Anonymous);
        assert_eq!(identity_from_cookie_header("username=; session=abc"), Identity::Anonymous);
    }

    #[test]
    fn test_expired_cookie() {
        assert_eq!(expired_cookie(USERNAME_COOKIE), "username=; Max-Age=0; path=/");
    }
}
