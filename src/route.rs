use dioxus::prelude::*;

use crate::components::Layout;
use crate::pages::{Home, Metaverse, NotFound, Welcome};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/?:uuid&:redeem")]
    Welcome { uuid: String, redeem: String },
    #[route("/home")]
    Home {},
    #[route("/metaverse")]
    Metaverse {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Paths that require an authenticated session.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Metaverse {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(path: &str) -> Route {
        match Route::from_str(path) {
            Ok(route) => route,
            Err(e) => panic!("failed to parse {}: {}", path, e),
        }
    }

    #[test]
    fn known_paths_resolve_to_their_pages() {
        assert!(matches!(parse("/"), Route::Welcome { .. }));
        assert_eq!(parse("/home"), Route::Home {});
        assert_eq!(parse("/metaverse"), Route::Metaverse {});
    }

    #[test]
    fn uuid_query_param_is_captured() {
        match parse("/?uuid=abc123") {
            Route::Welcome { uuid, redeem } => {
                assert_eq!(uuid, "abc123");
                assert!(redeem.is_empty());
            }
            other => panic!("unexpected route {:?}", other),
        }
    }

    #[test]
    fn legacy_redeem_query_param_is_captured() {
        match parse("/?redeem=zzz999") {
            Route::Welcome { uuid, redeem } => {
                assert!(uuid.is_empty());
                assert_eq!(redeem, "zzz999");
            }
            other => panic!("unexpected route {:?}", other),
        }
    }

    #[test]
    fn unmatched_paths_fall_through_to_404() {
        for path in ["/unknown/path", "/some/bad/route", "/metaverse/deeper", "/HOME"] {
            assert!(
                matches!(parse(path), Route::NotFound { .. }),
                "{} should be a 404",
                path
            );
        }
    }

    #[test]
    fn only_the_metaverse_is_gated() {
        assert!(parse("/metaverse").requires_session());
        assert!(!parse("/").requires_session());
        assert!(!parse("/home").requires_session());
        assert!(!parse("/unknown/path").requires_session());
    }
}
