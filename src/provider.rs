//! Mail provider classification.
//!
//! Providers are inferred from the domain part of an address with ordered
//! substring checks. A domain only has to *contain* one of the known tokens,
//! so `x@gmail.com.example.net` is tagged `gmail` and `x@acme.com` is tagged
//! `apple` (it contains `me.com`).

use std::fmt;

/// Coarse classification of an email's mail host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Gmail,
    Outlook,
    Zoho,
    Yahoo,
    Apple,
    Other,
}

/// Checked in order; the first provider with a matching token wins.
const DOMAIN_TOKENS: &[(Provider, &[&str])] = &[
    (Provider::Gmail, &["gmail.com"]),
    (
        Provider::Outlook,
        &["outlook.com", "hotmail.com", "live.com", "msn.com"],
    ),
    (Provider::Zoho, &["zoho.com"]),
    (Provider::Yahoo, &["yahoo.com"]),
    (Provider::Apple, &["icloud.com", "me.com", "apple.com"]),
];

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gmail => "gmail",
            Provider::Outlook => "outlook",
            Provider::Zoho => "zoho",
            Provider::Yahoo => "yahoo",
            Provider::Apple => "apple",
            Provider::Other => "other",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an email by the text after its last `@`.
///
/// Addresses without an `@` are classified on the whole string.
pub fn get_provider(email: &str) -> Provider {
    let domain = email
        .rsplit_once('@')
        .map_or(email, |(_, domain)| domain)
        .to_lowercase();

    DOMAIN_TOKENS
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|token| domain.contains(token)))
        .map_or(Provider::Other, |(provider, _)| *provider)
}
