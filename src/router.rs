//! Route table and path resolution.
//!
//! DESIGN
//! ======
//! `ROUTES` is an ordered list of patterns; the first match wins and
//! anything unmatched is `NotFound`. Patterns use `:name` for a single
//! segment and a trailing `**` for "this prefix and anything below it".
//! Leading, trailing and doubled slashes are ignored, as are query strings
//! except `node` on `/subscription`.

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;

/// Which view a pattern activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Dashboard,
    Collection,
    Boards,
    Subscription,
    Schema,
    SchemaDetails,
    Detail,
}

/// A resolved route with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Collection,
    Boards,
    Subscription { node: Option<String> },
    Schema { name: String },
    SchemaDetails { name: String, id: String },
    Detail { rest: String },
    NotFound { path: String },
}

pub const ROUTES: &[(&str, RouteKind)] = &[
    ("", RouteKind::Dashboard),
    ("collection", RouteKind::Collection),
    ("dashboard", RouteKind::Dashboard),
    ("boards", RouteKind::Boards),
    ("subscription", RouteKind::Subscription),
    ("schema/:name", RouteKind::Schema),
    ("schema/:name/:id", RouteKind::SchemaDetails),
    ("detail/**", RouteKind::Detail),
];

#[derive(Debug, Default)]
struct Captures<'a> {
    params: Vec<(&'a str, &'a str)>,
    rest: Vec<&'a str>,
}

impl Captures<'_> {
    fn param(&self, key: &str) -> String {
        self.params
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_owned())
            .unwrap_or_default()
    }
}

/// Resolve a client path such as `/schema/board/abc` to a route.
#[must_use]
pub fn resolve(path: &str) -> Route {
    let (path_only, query) = split_query(path);
    let segments: Vec<&str> = path_only.split('/').filter(|s| !s.is_empty()).collect();

    for (pattern, kind) in ROUTES {
        if let Some(captures) = match_pattern(pattern, &segments) {
            return build(*kind, &captures, query);
        }
    }

    Route::NotFound { path: path.to_owned() }
}

fn build(kind: RouteKind, captures: &Captures<'_>, query: Option<&str>) -> Route {
    match kind {
        RouteKind::Dashboard => Route::Dashboard,
        RouteKind::Collection => Route::Collection,
        RouteKind::Boards => Route::Boards,
        RouteKind::Subscription => Route::Subscription { node: query_param(query, "node") },
        RouteKind::Schema => Route::Schema { name: captures.param("name") },
        RouteKind::SchemaDetails => Route::SchemaDetails { name: captures.param("name"), id: captures.param("id") },
        RouteKind::Detail => Route::Detail { rest: captures.rest.join("/") },
    }
}

fn match_pattern<'a>(pattern: &'a str, segments: &[&'a str]) -> Option<Captures<'a>> {
    let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let mut captures = Captures::default();

    for (index, part) in parts.iter().copied().enumerate() {
        if part == "**" {
            captures.rest = segments[index.min(segments.len())..].to_vec();
            return Some(captures);
        }
        let segment = *segments.get(index)?;
        if let Some(name) = part.strip_prefix(':') {
            captures.params.push((name, segment));
        } else if part != segment {
            return None;
        }
    }

    (parts.len() == segments.len()).then_some(captures)
}

fn split_query(path: &str) -> (&str, Option<&str>) {
    let path = path.split('#').next().unwrap_or_default();
    match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    }
}

fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, value)| *name == key && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}
