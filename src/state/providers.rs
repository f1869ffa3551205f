//! Storage providers an asset class can be bound to.

#[cfg(test)]
#[path = "providers_test.rs"]
mod providers_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Provider {
    pub key: &'static str,
    pub name: &'static str,
}

pub const CLOUDFLARE: Provider = Provider { key: "cloudflare", name: "Cloudflare" };

pub const PROVIDERS: &[Provider] = &[CLOUDFLARE];

/// `(value, label)` pairs for a provider `<select>`.
#[must_use]
pub fn provider_options() -> Vec<(&'static str, &'static str)> {
    PROVIDERS.iter().map(|p| (p.key, p.name)).collect()
}

#[must_use]
pub fn from_key(key: Option<&str>) -> Option<Provider> {
    let key = key?;
    PROVIDERS.iter().copied().find(|p| p.key == key)
}
