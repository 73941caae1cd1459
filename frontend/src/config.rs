use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::Url;

// Compiled-in site tables. Edit these to retarget the page.

pub const DESTINATIONS: &[(&str, &str)] = &[
    ("whatsapp", "https://wa.me/+8613427596902"),
    ("instagram", "https://www.instagram.com/yuki_bagss"),
    ("telegram", "https://t.me/+8613427596902"),
    ("catalog", "https://goolata.com"),
];

pub const POLICY_LINKS: &[(&str, &str)] = &[
    ("privacy", "https://policies.example.com/privacy"),
    ("terms", "https://policies.example.com/terms"),
    ("refund", "https://policies.example.com/refund"),
    ("contact", "https://policies.example.com/contact"),
];

// Placeholder identity until the real support desk is confirmed.
pub const CONTACT_EMAIL: &str = "concierge@example.com";
pub const CONTACT_LOCATION: &str = "Showroom address pending";

pub const ACTIVE_VARIANT: PageVariant = PageVariant::Full;

pub const ANALYTICS_ENABLED: bool = true;
pub const ANALYTICS_GLOBAL: &str = "fbq";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

const PLACEHOLDER_HOSTS: &[&str] = &["example.com", "example.org", "example.net"];
const PLACEHOLDER_TLDS: &[&str] = &[".invalid", ".test", ".example"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown key `{key}` in {table} table")]
    UnknownKey { table: &'static str, key: String },
    #[error("key `{key}` appears more than once in {table} table")]
    DuplicateKey { table: &'static str, key: String },
    #[error("{table} table is missing required key `{key}`")]
    MissingKey { table: &'static str, key: &'static str },
    #[error("{table}.{key} is not an absolute http(s) URL (`{url}`): {reason}")]
    InvalidUrl {
        table: &'static str,
        key: String,
        url: String,
        reason: String,
    },
    #[error("contact email `{0}` is not a valid address")]
    InvalidEmail(String),
    #[error("contact location must not be empty")]
    EmptyLocation,
    #[error("page variant {variant} requires the {table} table")]
    MissingTable {
        variant: PageVariant,
        table: &'static str,
    },
    #[error("analytics is enabled but no agent global name is configured")]
    EmptyAnalyticsGlobal,
}

/// A closed set of keys a [`LinkRegistry`] must cover completely.
pub trait RegistryKey: Copy + Ord + fmt::Debug + 'static {
    const TABLE: &'static str;
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChannelKey {
    WhatsApp,
    Instagram,
    Telegram,
    Catalog,
}

impl RegistryKey for ChannelKey {
    const TABLE: &'static str = "destinations";
    const ALL: &'static [Self] = &[
        ChannelKey::WhatsApp,
        ChannelKey::Instagram,
        ChannelKey::Telegram,
        ChannelKey::Catalog,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ChannelKey::WhatsApp => "whatsapp",
            ChannelKey::Instagram => "instagram",
            ChannelKey::Telegram => "telegram",
            ChannelKey::Catalog => "catalog",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolicyKind {
    Privacy,
    Terms,
    Refund,
    Contact,
}

impl PolicyKind {
    /// Display label, also used to build the `PolicyView_<Label>` event name.
    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Privacy => "Privacy",
            PolicyKind::Terms => "Terms",
            PolicyKind::Refund => "Refund",
            PolicyKind::Contact => "Contact",
        }
    }
}

impl RegistryKey for PolicyKind {
    const TABLE: &'static str = "policies";
    const ALL: &'static [Self] = &[
        PolicyKind::Privacy,
        PolicyKind::Terms,
        PolicyKind::Refund,
        PolicyKind::Contact,
    ];

    fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Privacy => "privacy",
            PolicyKind::Terms => "terms",
            PolicyKind::Refund => "refund",
            PolicyKind::Contact => "contact",
        }
    }
}

/// Total mapping from every key of `K` to a validated absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRegistry<K: RegistryKey> {
    entries: BTreeMap<K, String>,
}

pub type DestinationRegistry = LinkRegistry<ChannelKey>;
pub type PolicyLinkRegistry = LinkRegistry<PolicyKind>;

impl<K: RegistryKey> LinkRegistry<K> {
    pub fn from_entries(raw: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let mut entries = BTreeMap::new();
        for (raw_key, raw_url) in raw {
            let key = K::parse(raw_key).ok_or_else(|| ConfigError::UnknownKey {
                table: K::TABLE,
                key: raw_key.to_string(),
            })?;
            let url = validate_url(K::TABLE, raw_key, raw_url)?;
            if is_placeholder(&url) {
                log::warn!("{}.{} points at placeholder URL {}", K::TABLE, raw_key, raw_url);
            }
            if entries.insert(key, raw_url.to_string()).is_some() {
                return Err(ConfigError::DuplicateKey {
                    table: K::TABLE,
                    key: raw_key.to_string(),
                });
            }
        }

        if let Some(missing) = K::ALL.iter().find(|key| !entries.contains_key(*key)) {
            return Err(ConfigError::MissingKey {
                table: K::TABLE,
                key: missing.as_str(),
            });
        }

        Ok(Self { entries })
    }

    /// Construction guarantees every key is present, so lookup cannot miss.
    pub fn url(&self, key: K) -> &str {
        self.entries.get(&key).map(String::as_str).unwrap_or_default()
    }

}

fn validate_url(table: &'static str, key: &str, raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        table,
        key: key.to_string(),
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

fn is_placeholder(url: &Url) -> bool {
    url.host_str().map_or(false, is_placeholder_host)
}

fn is_placeholder_host(host: &str) -> bool {
    PLACEHOLDER_HOSTS
        .iter()
        .any(|p| host == *p || host.ends_with(&format!(".{p}")))
        || PLACEHOLDER_TLDS.iter().any(|tld| host.ends_with(tld))
}

/// Human-facing support identity shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactIdentity {
    email: String,
    location: String,
}

impl ContactIdentity {
    pub fn new(email: &str, location: &str) -> Result<Self, ConfigError> {
        let email = email.trim();
        let (local, domain) = email.split_once('@').unwrap_or_default();
        let dotted_badly =
            |part: &str| part.starts_with('.') || part.ends_with('.') || part.contains("..");
        if !EMAIL_PATTERN.is_match(email) || dotted_badly(local) || dotted_badly(domain) {
            return Err(ConfigError::InvalidEmail(email.to_string()));
        }
        if is_placeholder_host(domain) {
            log::warn!("contact email {} uses a placeholder domain", email);
        }
        let location = location.trim();
        if location.is_empty() {
            return Err(ConfigError::EmptyLocation);
        }
        Ok(Self {
            email: email.to_string(),
            location: location.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Which footer the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    /// Brand footer only.
    Essential,
    /// Adds the contact identity.
    Contact,
    /// Adds the contact identity and policy document links.
    Full,
}

impl PageVariant {
    pub fn shows_contact(self) -> bool {
        matches!(self, PageVariant::Contact | PageVariant::Full)
    }

    pub fn shows_policies(self) -> bool {
        matches!(self, PageVariant::Full)
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageVariant::Essential => "essential",
            PageVariant::Contact => "contact",
            PageVariant::Full => "full",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSettings {
    pub enabled: bool,
    /// Name of the agent function looked up on `window`.
    pub global_name: String,
}

/// Raw, unvalidated inputs to [`SiteConfig::from_tables`].
#[derive(Debug, Clone, Copy)]
pub struct RawTables<'a> {
    pub destinations: &'a [(&'a str, &'a str)],
    pub policies: Option<&'a [(&'a str, &'a str)]>,
    pub contact: Option<(&'a str, &'a str)>,
    pub variant: PageVariant,
    pub analytics_enabled: bool,
    pub analytics_global: &'a str,
}

impl RawTables<'static> {
    pub fn compiled() -> Self {
        Self {
            destinations: DESTINATIONS,
            policies: Some(POLICY_LINKS),
            contact: Some((CONTACT_EMAIL, CONTACT_LOCATION)),
            variant: ACTIVE_VARIANT,
            analytics_enabled: ANALYTICS_ENABLED,
            analytics_global: ANALYTICS_GLOBAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub destinations: DestinationRegistry,
    pub policies: Option<PolicyLinkRegistry>,
    pub contact: Option<ContactIdentity>,
    pub variant: PageVariant,
    pub analytics: AnalyticsSettings,
}

impl SiteConfig {
    /// Loads and validates the compiled-in tables. Call once at startup.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_tables(RawTables::compiled())
    }

    pub fn from_tables(tables: RawTables<'_>) -> Result<Self, ConfigError> {
        let variant = tables.variant;
        let destinations = DestinationRegistry::from_entries(tables.destinations)?;
        // Tables the variant does not render are neither validated nor kept.
        let policies = tables
            .policies
            .filter(|_| variant.shows_policies())
            .map(PolicyLinkRegistry::from_entries)
            .transpose()?;
        let contact = tables
            .contact
            .filter(|_| variant.shows_contact())
            .map(|(email, location)| ContactIdentity::new(email, location))
            .transpose()?;

        if tables.variant.shows_contact() && contact.is_none() {
            return Err(ConfigError::MissingTable {
                variant: tables.variant,
                table: "contact",
            });
        }
        if tables.variant.shows_policies() && policies.is_none() {
            return Err(ConfigError::MissingTable {
                variant: tables.variant,
                table: PolicyKind::TABLE,
            });
        }

        let global_name = tables.analytics_global.trim();
        if tables.analytics_enabled && global_name.is_empty() {
            return Err(ConfigError::EmptyAnalyticsGlobal);
        }

        Ok(Self {
            destinations,
            policies,
            contact,
            variant: tables.variant,
            analytics: AnalyticsSettings {
                enabled: tables.analytics_enabled,
                global_name: global_name.to_string(),
            },
        })
    }

    /// Policy registry, present only when the active variant renders policy links.
    pub fn visible_policies(&self) -> Option<&PolicyLinkRegistry> {
        self.policies.as_ref()
    }

    /// Contact identity, present only when the active variant renders it.
    pub fn visible_contact(&self) -> Option<&ContactIdentity> {
        self.contact.as_ref()
    }
}
