//! Route sensitivity classification.
//!
//! Pure, deterministic mapping from a request path to the tier that
//! decides which pipeline checks apply. Evaluation order is a contract:
//! public beats static-asset beats protected, and within each list the
//! first declared prefix wins.

use crate::policy::{PROTECTED_PATHS, PUBLIC_PATHS, STATIC_ASSET_PREFIX};

/// Sensitivity tier of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No authentication required (home, auth routes, framework internals).
    Public,
    /// Compiled assets and anything that looks like a file.
    StaticAsset,
    /// Requires a valid session.
    Protected,
    /// Everything else: passes the auth gate but is still CSRF-guarded.
    Default,
}

/// Classifies a request path.
///
/// The static-asset rule treats any path containing a `.` as an asset.
/// That heuristic is intentionally over-broad (`/a.b/x` is an "asset")
/// and is kept as deployed; see the pinning tests below.
pub fn classify(path: &str) -> RouteClass {
    let is_public = PUBLIC_PATHS.iter().any(|p| {
        if *p == "/" {
            path == "/"
        } else {
            path.starts_with(p)
        }
    });
    if is_public {
        return RouteClass::Public;
    }

    if path.starts_with(STATIC_ASSET_PREFIX) || path.contains('.') {
        return RouteClass::StaticAsset;
    }

    if PROTECTED_PATHS.iter().any(|p| path.starts_with(p)) {
        return RouteClass::Protected;
    }

    RouteClass::Default
}
