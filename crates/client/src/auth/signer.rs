//! RFC 5849 request signing (HMAC-SHA1)

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;
use url::Url;
use uuid::Uuid;

use super::Credentials;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// RFC 3986 unreserved characters stay verbatim, everything else is
/// percent-encoded (RFC 5849 section 3.6).
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

type HmacSha1 = Hmac<Sha1>;

fn encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// The request URL with query and fragment stripped, as it enters the
/// signature base string.
fn request_base_url(url: &Url) -> String {
    let mut base = url.clone();
    base.set_query(None);
    base.set_fragment(None);
    base.to_string()
}

fn hmac_sha1(key: &str, message: &str) -> Vec<u8> {
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(message.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// The normalized parameter string: query pairs plus the oauth
/// parameters, each pair percent-encoded, sorted, joined with `&`.
fn normalized_parameters(url: &Url, oauth_params: &[(&str, &str)]) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode(&k), encode(&v)))
        .collect();
    params.extend(oauth_params.iter().map(|(k, v)| (encode(k), encode(v))));
    params.sort();

    let mut out = String::new();
    for (i, (k, v)) in params.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(k);
        out.push('=');
        out.push_str(v);
    }
    out
}

fn signature_base_string(method: &str, url: &Url, oauth_params: &[(&str, &str)]) -> String {
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(&request_base_url(url)),
        encode(&normalized_parameters(url, oauth_params))
    )
}

fn signature(
    credentials: &Credentials,
    method: &str,
    url: &Url,
    nonce: &str,
    timestamp: &str,
) -> String {
    let oauth_params = oauth_params(credentials, nonce, timestamp);
    let base_string = signature_base_string(method, url, &oauth_params);
    let key = format!(
        "{}&{}",
        encode(&credentials.consumer_secret),
        encode(&credentials.token_secret)
    );
    BASE64.encode(hmac_sha1(&key, &base_string))
}

fn oauth_params<'a>(
    credentials: &'a Credentials,
    nonce: &'a str,
    timestamp: &'a str,
) -> [(&'static str, &'a str); 6] {
    [
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp),
        ("oauth_token", credentials.token.as_str()),
        ("oauth_version", OAUTH_VERSION),
    ]
}

fn header(
    credentials: &Credentials,
    method: &str,
    url: &Url,
    nonce: &str,
    timestamp: &str,
) -> String {
    let sig = signature(credentials, method, url, nonce, timestamp);
    format!(
        "OAuth oauth_consumer_key=\"{}\", oauth_nonce=\"{}\", oauth_signature=\"{}\", \
         oauth_signature_method=\"{}\", oauth_timestamp=\"{}\", oauth_token=\"{}\", \
         oauth_version=\"{}\"",
        encode(&credentials.consumer_key),
        encode(nonce),
        encode(&sig),
        SIGNATURE_METHOD,
        encode(timestamp),
        encode(&credentials.token),
        OAUTH_VERSION,
    )
}

/// Builds the `Authorization` header value for one request, with a
/// fresh nonce and the current UNIX timestamp.
pub(crate) fn authorization_header(credentials: &Credentials, method: &str, url: &Url) -> String {
    let nonce = Uuid::new_v4().simple().to_string();
    let timestamp = Utc::now().timestamp().to_string();
    header(credentials, method, url, &nonce, &timestamp)
}
