//! Priced products.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Top-level domains the registrar sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tld {
    /// `.com`
    Com,
    /// `.net`
    Net,
    /// `.org`
    Org,
    /// `.info`
    Info,
    /// `.biz`
    Biz,
    /// `.us`
    Us,
    /// `.name`
    Name,
    /// `.in`
    In,
    /// `.mobi`
    Mobi,
    /// `.bz`
    Bz,
    /// `.mn`
    Mn,
    /// `.cc`
    Cc,
    /// `.tv`
    Tv,
}

impl Tld {
    /// Every supported TLD, in price-list order.
    pub const ALL: [Self; 13] = [
        Self::Com,
        Self::Net,
        Self::Org,
        Self::Info,
        Self::Biz,
        Self::Us,
        Self::Name,
        Self::In,
        Self::Mobi,
        Self::Bz,
        Self::Mn,
        Self::Cc,
        Self::Tv,
    ];

    /// Returns the lowercase label, without the dot.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Com => "com",
            Self::Net => "net",
            Self::Org => "org",
            Self::Info => "info",
            Self::Biz => "biz",
            Self::Us => "us",
            Self::Name => "name",
            Self::In => "in",
            Self::Mobi => "mobi",
            Self::Bz => "bz",
            Self::Cc => "cc",
            Self::Mn => "mn",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for Tld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tld {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tld| tld.as_str() == label)
            .ok_or_else(|| DomainError::UnsupportedTld(s.to_owned()))
    }
}

/// What is being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductAction {
    /// New registration.
    Register,
    /// Transfer in.
    Transfer,
    /// Renewal.
    Renewal,
}

impl ProductAction {
    /// Returns the wire suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Transfer => "transfer",
            Self::Renewal => "renewal",
        }
    }
}

impl FromStr for ProductAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "register" | "registration" => Ok(Self::Register),
            "transfer" => Ok(Self::Transfer),
            "renewal" | "renew" => Ok(Self::Renewal),
            _ => Err(DomainError::UnknownProductAction(s.to_owned())),
        }
    }
}

/// A priced product, e.g. `.com` registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductType {
    /// Domain extension.
    pub tld: Tld,
    /// Operation priced.
    pub action: ProductAction,
}

impl ProductType {
    /// Creates a product type.
    #[must_use]
    pub const fn new(tld: Tld, action: ProductAction) -> Self {
        Self { tld, action }
    }

    /// Returns the product code the service expects (`domcom_register`).
    #[must_use]
    pub fn code(&self) -> String {
        format!("dom{}_{}", self.tld.as_str(), self.action.as_str())
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_product_codes() {
        assert_eq!(ProductType::new(Tld::Com, ProductAction::Register).code(), "domcom_register");
        assert_eq!(ProductType::new(Tld::Mobi, ProductAction::Renewal).code(), "dommobi_renewal");
        assert_eq!(ProductType::new(Tld::Tv, ProductAction::Transfer).to_string(), "domtv_transfer");
    }

    #[test]
    fn test_parse_tld_and_action() {
        assert_eq!(".COM".parse::<Tld>().ok(), Some(Tld::Com));
        assert!("xyz".parse::<Tld>().is_err());
        assert_eq!("renew".parse::<ProductAction>().ok(), Some(ProductAction::Renewal));
        assert!("sell".parse::<ProductAction>().is_err());
    }

    #[test]
    fn test_price_list_order() {
        let labels: Vec<_> = Tld::ALL.iter().map(Tld::as_str).collect();
        assert_eq!(
            labels,
            ["com", "net", "org", "info", "biz", "us", "name", "in", "mobi", "bz", "mn", "cc", "tv"]
        );
    }

    #[test]
    fn test_all_tlds_are_distinct() {
        let mut labels: Vec<_> = Tld::ALL.iter().map(Tld::as_str).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Tld::ALL.len());
    }
}
