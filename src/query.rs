use axum::extract::Query;

/// Query string as decoded `(key, value)` pairs. Unlike `Query<T>` for a
/// struct, a repeated key is not a rejection; lookups take the first value.
pub type QueryPairs = Query<Vec<(String, String)>>;

pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}
