//! Marketplace (locale) table.
//!
//! A marketplace determines the API host, the signing region and the
//! default `Accept-Language` of a request. Unknown domains fall back to the
//! United States store.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marketplace {
    Australia,
    Brazil,
    Canada,
    Egypt,
    France,
    Germany,
    India,
    Italy,
    Japan,
    Mexico,
    Netherlands,
    Poland,
    Singapore,
    SaudiArabia,
    Spain,
    Sweden,
    Turkey,
    UnitedArabEmirates,
    UnitedKingdom,
    #[default]
    UnitedStates,
}

impl Marketplace {
    pub const ALL: [Marketplace; 20] = [
        Marketplace::Australia,
        Marketplace::Brazil,
        Marketplace::Canada,
        Marketplace::Egypt,
        Marketplace::France,
        Marketplace::Germany,
        Marketplace::India,
        Marketplace::Italy,
        Marketplace::Japan,
        Marketplace::Mexico,
        Marketplace::Netherlands,
        Marketplace::Poland,
        Marketplace::Singapore,
        Marketplace::SaudiArabia,
        Marketplace::Spain,
        Marketplace::Sweden,
        Marketplace::Turkey,
        Marketplace::UnitedArabEmirates,
        Marketplace::UnitedKingdom,
        Marketplace::UnitedStates,
    ];

    /// Store domain, also sent as the `Marketplace` filter.
    pub fn domain(self) -> &'static str {
        match self {
            Marketplace::Australia => "www.amazon.com.au",
            Marketplace::Brazil => "www.amazon.com.br",
            Marketplace::Canada => "www.amazon.ca",
            Marketplace::Egypt => "www.amazon.eg",
            Marketplace::France => "www.amazon.fr",
            Marketplace::Germany => "www.amazon.de",
            Marketplace::India => "www.amazon.in",
            Marketplace::Italy => "www.amazon.it",
            Marketplace::Japan => "www.amazon.co.jp",
            Marketplace::Mexico => "www.amazon.com.mx",
            Marketplace::Netherlands => "www.amazon.nl",
            Marketplace::Poland => "www.amazon.pl",
            Marketplace::Singapore => "www.amazon.sg",
            Marketplace::SaudiArabia => "www.amazon.sa",
            Marketplace::Spain => "www.amazon.es",
            Marketplace::Sweden => "www.amazon.se",
            Marketplace::Turkey => "www.amazon.com.tr",
            Marketplace::UnitedArabEmirates => "www.amazon.ae",
            Marketplace::UnitedKingdom => "www.amazon.co.uk",
            Marketplace::UnitedStates => "www.amazon.com",
        }
    }

    /// API host: the store domain with `www` swapped for `webservices`.
    pub fn host(self) -> String {
        let domain = self.domain();
        match domain.strip_prefix("www.") {
            Some(rest) => format!("webservices.{rest}"),
            None => domain.to_string(),
        }
    }

    /// Signing region.
    pub fn region(self) -> &'static str {
        match self {
            Marketplace::Australia | Marketplace::Japan | Marketplace::Singapore => "us-west-2",
            Marketplace::Brazil
            | Marketplace::Canada
            | Marketplace::Mexico
            | Marketplace::UnitedStates => "us-east-1",
            Marketplace::Egypt => "us-west-1",
            Marketplace::France
            | Marketplace::Germany
            | Marketplace::India
            | Marketplace::Italy
            | Marketplace::Netherlands
            | Marketplace::Poland
            | Marketplace::SaudiArabia
            | Marketplace::Spain
            | Marketplace::Sweden
            | Marketplace::Turkey
            | Marketplace::UnitedArabEmirates
            | Marketplace::UnitedKingdom => "eu-west-1",
        }
    }

    /// Default response language.
    pub fn language(self) -> &'static str {
        match self {
            Marketplace::Australia => "en_AU",
            Marketplace::Brazil => "pt_BR",
            Marketplace::Canada => "en_CA",
            Marketplace::Egypt => "ar_EG",
            Marketplace::France => "fr_FR",
            Marketplace::Germany => "de_DE",
            Marketplace::India => "en_IN",
            Marketplace::Italy => "it_IT",
            Marketplace::Japan => "ja_JP",
            Marketplace::Mexico => "es_MX",
            Marketplace::Netherlands => "nl_NL",
            Marketplace::Poland => "pl_PL",
            Marketplace::Singapore => "en_SG",
            Marketplace::SaudiArabia => "en_AE",
            Marketplace::Spain => "es_ES",
            Marketplace::Sweden => "sv_SE",
            Marketplace::Turkey => "tr_TR",
            Marketplace::UnitedArabEmirates => "en_AE",
            Marketplace::UnitedKingdom => "en_GB",
            Marketplace::UnitedStates => "en_US",
        }
    }

    pub fn from_domain(domain: &str) -> Option<Marketplace> {
        Marketplace::ALL.into_iter().find(|m| m.domain() == domain)
    }

    /// Like `from_domain`, falling back to the default marketplace.
    pub fn lookup(domain: &str) -> Marketplace {
        Marketplace::from_domain(domain).unwrap_or_default()
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.domain())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown marketplace: {0:?}")]
pub struct UnknownMarketplace(pub String);

impl FromStr for Marketplace {
    type Err = UnknownMarketplace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Marketplace::from_domain(s).ok_or_else(|| UnknownMarketplace(s.to_string()))
    }
}
