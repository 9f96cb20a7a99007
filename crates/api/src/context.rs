use campushub_auth::Principal;

/// Authenticated identity for a request.
///
/// Inserted by the strict auth middleware; immutable for the request's
/// lifetime and present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext(pub Principal);

/// Possibly-anonymous identity for a request.
///
/// Inserted by the optional auth middleware on read routes that personalize
/// output but stay accessible to anonymous callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalPrincipal(pub Option<Principal>);
