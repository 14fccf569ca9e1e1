//! Reference resolution.

use crate::{normalizer, Uri};

/// Resolves `reference` against `base`, per RFC 3986 section 5.2.2.
///
/// Operates on already-parsed components and cannot fail; the target is a
/// fresh value built by selective copying. The fragment always comes from
/// the reference, never from the base.
pub(crate) fn resolve(base: &Uri, reference: &Uri) -> Uri {
    let mut target = Uri::default();

    if reference.scheme.is_some() {
        target.scheme = reference.scheme.clone();
        target.userinfo = reference.userinfo.clone();
        target.host = reference.host.clone();
        target.port = reference.port;
        target.path = reference.path.clone();
        normalizer::remove_dot_segments(&mut target.path);
        target.query = reference.query.clone();
    } else {
        target.scheme = base.scheme.clone();

        if reference.host.as_deref().map_or(false, |h| !h.is_empty()) {
            target.userinfo = reference.userinfo.clone();
            target.host = reference.host.clone();
            target.port = reference.port;
            target.path = reference.path.clone();
            normalizer::remove_dot_segments(&mut target.path);
            target.query = reference.query.clone();
        } else {
            target.userinfo = base.userinfo.clone();
            target.host = base.host.clone();
            target.port = base.port;

            if reference.path.is_empty() {
                target.path = base.path.clone();
                target.query = if reference.query.is_some() {
                    reference.query.clone()
                } else {
                    base.query.clone()
                };
            } else {
                if reference.path.first().map_or(false, |s| s.is_empty()) {
                    target.path = reference.path.clone();
                } else {
                    // Merge (RFC 3986 section 5.2.3): everything up to the
                    // last segment of the base path, then the reference
                    // path. A single-segment base keeps its segment, which
                    // covers the authority-with-empty-path case.
                    target.path = base.path.clone();
                    if target.path.len() > 1 {
                        target.path.pop();
                    }
                    target.path.extend(reference.path.iter().cloned());
                }
                normalizer::remove_dot_segments(&mut target.path);
                target.query = reference.query.clone();
            }
        }
    }

    target.fragment = reference.fragment.clone();
    target
}
