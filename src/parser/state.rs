/// Top-level URI parser phases, visited strictly left to right
/// Based on RFC 3986 `URI = scheme ":" hier-part [ "?" query ] [ "#" fragment ]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriState {
    /// Scheme state, up to the first ':'
    Scheme,
    /// Hierarchical part state, see [`HierState`]
    HierPart,
    /// Query state, after '?'
    Query,
    /// Fragment state, after '#'
    Fragment,
}

/// Sub-phases of the hierarchical part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierState {
    /// Looking for the first '/' of a network-path
    FirstSlash,
    /// Looking for the second '/' of a network-path
    SecondSlash,
    /// Authority state, user-info and host not yet told apart
    Authority,
    /// Host state, entered after a user-info '@'
    Host,
    /// Bracketed IP literal host
    HostIpv6,
    /// Port state, after the host ':'
    Port,
    /// Path state
    Path,
}
