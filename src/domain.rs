//! Domain normalization for comparing an official site against result links.

use url::Url;

/// Normalize a URL or bare host string into a canonical lowercase hostname.
///
/// Inputs without a scheme get `https://` prepended before parsing. A single
/// leading `www.` is stripped from the parsed host. Malformed input falls
/// back to the raw string lowercased so the classifier never has to handle
/// a parse error.
pub fn normalize_domain(raw: &str) -> String {
    // Scheme detection must be case-insensitive: "HTTP://..." already has a
    // scheme and must be parsed as-is, not wrapped in "https://".
    let candidate = if raw.to_ascii_lowercase().contains("http") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    match Url::parse(&candidate) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => {
                let host = host.to_lowercase();
                host.strip_prefix("www.").unwrap_or(&host).to_string()
            }
            // Valid URL but no host component (e.g. "mailto:x") — treat as malformed
            None => raw.to_lowercase(),
        },
        Err(_) => raw.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_url() {
        assert_eq!(normalize_domain("https://www.acme.com/about"), "acme.com");
    }

    #[test]
    fn test_normalize_uppercase_scheme() {
        // An uppercase scheme still counts as "has a scheme"; wrapping it in
        // https:// would parse "HTTP" as the host.
        assert_eq!(normalize_domain("HTTP://WWW.Acme.COM/x"), "acme.com");
        assert_eq!(normalize_domain("HtTpS://www.acme.com"), "acme.com");
    }

    #[test]
    fn test_normalize_bare_host() {
        assert_eq!(normalize_domain("acme.com"), "acme.com");
        assert_eq!(normalize_domain("www.acme.com"), "acme.com");
        assert_eq!(normalize_domain("Acme.Com"), "acme.com");
    }

    #[test]
    fn test_normalize_keeps_subdomains() {
        assert_eq!(normalize_domain("https://maps.google.com/place/x"), "maps.google.com");
        // Only a leading www. is stripped
        assert_eq!(normalize_domain("www.maps.google.com"), "maps.google.com");
    }

    #[test]
    fn test_malformed_input_falls_back_to_lowercased_raw() {
        assert_eq!(normalize_domain("not a url"), "not a url");
        assert_eq!(normalize_domain("NOT A URL"), "not a url");
        assert_eq!(normalize_domain(""), "");
    }

    #[test]
    fn test_url_without_host_falls_back() {
        assert_eq!(normalize_domain("http://"), "http://");
    }
}
