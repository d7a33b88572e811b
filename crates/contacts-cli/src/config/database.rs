//! Database URL normalization.

use url::Url;

use crate::TRACING_TARGET_CONFIG;

/// Hosts that may connect without TLS.
const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Rewrites a Postgres connection URL into the form the driver expects.
///
/// - `ssl=true` becomes `sslmode=require` and `ssl=false` becomes `sslmode=disable`
/// - remote hosts without an `sslmode` get `sslmode=require` appended
///
/// Empty strings and values that are not URLs (such as key-value DSNs) are
/// returned unchanged.
pub fn normalize_database_url(database_url: &str) -> String {
    if database_url.is_empty() {
        return String::new();
    }

    let mut url = match Url::parse(database_url) {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!(
                target: TRACING_TARGET_CONFIG,
                error = %err,
                "Database URL is not a URL, leaving it unchanged"
            );
            return database_url.to_owned();
        }
    };

    let mut rewritten = false;
    let mut pairs = Vec::new();
    for (key, value) in url.query_pairs().into_owned() {
        let sslmode = match (key.as_str(), value.as_str()) {
            ("ssl", "true") => Some("require"),
            ("ssl", "false") => Some("disable"),
            _ => None,
        };

        match sslmode {
            Some(mode) => {
                rewritten = true;
                pairs.push(("sslmode".to_owned(), mode.to_owned()));
            }
            None => pairs.push((key, value)),
        }
    }

    let has_sslmode = pairs.iter().any(|(key, _)| key == "sslmode");
    let is_local = url
        .host_str()
        .is_some_and(|host| LOCAL_HOSTS.contains(&host));
    let require_tls = !has_sslmode && !is_local;

    if !rewritten && !require_tls {
        return database_url.to_owned();
    }

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        query.extend_pairs(&pairs);
        if require_tls {
            query.append_pair("sslmode", "require");
        }
    }

    url.into()
}
