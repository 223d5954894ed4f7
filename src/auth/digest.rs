use std::collections::HashMap;

use md5::{Digest, Md5};

use crate::config::Credentials;

const SCHEME_PREFIX: &str = "Digest ";
const REQUIRED: [&str; 5] = ["username", "realm", "nonce", "uri", "response"];

fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// `WWW-Authenticate` value for a fresh challenge.
pub fn challenge(realm: &str, nonce: &str) -> String {
    format!(r#"Digest realm="{realm}", nonce="{nonce}", algorithm="MD5", qop="auth""#)
}

/// Key/value pairs of a `Digest ...` authorization header.
///
/// Matching is permissive: pairs are comma separated, in any order, quoted
/// or bare. Later duplicates win. Returns `None` for any other scheme.
pub fn parse_params(header: &str) -> Option<HashMap<&str, &str>> {
    let rest = header.strip_prefix(SCHEME_PREFIX)?;

    let params: HashMap<&str, &str> = rest
        .split(',')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = key.trim();
            let value = value.trim().trim_matches('"');
            let is_word = !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_');
            (is_word && !value.is_empty()).then_some((key, value))
        })
        .collect();

    Some(params)
}

/// Expected `response` for the given request, as lowercase hex.
pub fn expected_response(
    credentials: &Credentials,
    method: &str,
    uri: &str,
    nonce: &str,
) -> String {
    let ha1 = md5_hex(&format!(
        "{}:{}:{}",
        credentials.username, credentials.realm, credentials.password
    ));
    let ha2 = md5_hex(&format!("{method}:{uri}"));
    md5_hex(&format!("{ha1}:{nonce}:{ha2}"))
}

/// Checks an authorization header against the configured credentials.
///
/// Nonces are not tracked; any nonce echoed back with a matching response
/// is accepted.
pub fn verify(header: &str, credentials: &Credentials, method: &str, uri: &str) -> bool {
    let Some(params) = parse_params(header) else {
        return false;
    };
    if !REQUIRED.iter().all(|k| params.contains_key(k)) {
        return false;
    }
    if params["username"] != credentials.username || params["realm"] != credentials.realm {
        return false;
    }

    let expected = expected_response(credentials, method, uri, params["nonce"]);
    params["response"].eq_ignore_ascii_case(&expected)
}
