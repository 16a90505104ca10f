//! Riot routing values: platforms and regional clusters
//!
//! Riot's API is split across platform hosts (`na1`, `euw1`, ...) for
//! summoner and league data, and regional cluster hosts (`americas`,
//! `europe`, `asia`, `sea`) for account and match data. This module maps
//! between the two.

/// A platform routing value, as supplied by clients in the `region` query
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Br1,
    Eun1,
    Euw1,
    Jp1,
    Kr,
    La1,
    La2,
    Na1,
    Oc1,
    Tr1,
    Ru,
    Ph2,
    Sg2,
    Th2,
    Tw2,
    Vn2,
}

/// A regional cluster host serving account and match endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    Americas,
    Europe,
    Asia,
    Sea,
}

impl Platform {
    /// Returns a slice containing all platform variants.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::Br1,
            Platform::Eun1,
            Platform::Euw1,
            Platform::Jp1,
            Platform::Kr,
            Platform::La1,
            Platform::La2,
            Platform::Na1,
            Platform::Oc1,
            Platform::Tr1,
            Platform::Ru,
            Platform::Ph2,
            Platform::Sg2,
            Platform::Th2,
            Platform::Tw2,
            Platform::Vn2,
        ]
    }

    /// Returns the lowercase routing value used in API hostnames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Br1 => "br1",
            Platform::Eun1 => "eun1",
            Platform::Euw1 => "euw1",
            Platform::Jp1 => "jp1",
            Platform::Kr => "kr",
            Platform::La1 => "la1",
            Platform::La2 => "la2",
            Platform::Na1 => "na1",
            Platform::Oc1 => "oc1",
            Platform::Tr1 => "tr1",
            Platform::Ru => "ru",
            Platform::Ph2 => "ph2",
            Platform::Sg2 => "sg2",
            Platform::Th2 => "th2",
            Platform::Tw2 => "tw2",
            Platform::Vn2 => "vn2",
        }
    }

    /// Returns the uppercase form used in user-facing messages ("NA1").
    pub fn display(&self) -> &'static str {
        match self {
            Platform::Br1 => "BR1",
            Platform::Eun1 => "EUN1",
            Platform::Euw1 => "EUW1",
            Platform::Jp1 => "JP1",
            Platform::Kr => "KR",
            Platform::La1 => "LA1",
            Platform::La2 => "LA2",
            Platform::Na1 => "NA1",
            Platform::Oc1 => "OC1",
            Platform::Tr1 => "TR1",
            Platform::Ru => "RU",
            Platform::Ph2 => "PH2",
            Platform::Sg2 => "SG2",
            Platform::Th2 => "TH2",
            Platform::Tw2 => "TW2",
            Platform::Vn2 => "VN2",
        }
    }

    /// Returns the regional cluster serving this platform's match history.
    pub fn cluster(&self) -> Cluster {
        match self {
            Platform::Br1 | Platform::La1 | Platform::La2 | Platform::Na1 => Cluster::Americas,
            Platform::Eun1 | Platform::Euw1 | Platform::Tr1 | Platform::Ru => Cluster::Europe,
            Platform::Jp1 | Platform::Kr => Cluster::Asia,
            Platform::Oc1
            | Platform::Ph2
            | Platform::Sg2
            | Platform::Th2
            | Platform::Tw2
            | Platform::Vn2 => Cluster::Sea,
        }
    }

    /// Returns the cluster used for Account-V1 lookups.
    ///
    /// The account endpoints are not served on the `sea` cluster, so sea
    /// platforms resolve accounts through `asia` instead.
    pub fn account_cluster(&self) -> Cluster {
        match self.cluster() {
            Cluster::Sea => Cluster::Asia,
            cluster => cluster,
        }
    }

    /// Parses a routing value from client input.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for values Riot does not route.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Platform> {
        let normalized = s.trim().to_lowercase();
        Platform::all()
            .iter()
            .copied()
            .find(|platform| platform.as_str() == normalized)
    }
}

impl Cluster {
    /// Returns the lowercase routing value used in API hostnames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Americas => "americas",
            Cluster::Europe => "europe",
            Cluster::Asia => "asia",
            Cluster::Sea => "sea",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_mapping() {
        assert_eq!(Platform::Br1.cluster(), Cluster::Americas);
        assert_eq!(Platform::La1.cluster(), Cluster::Americas);
        assert_eq!(Platform::La2.cluster(), Cluster::Americas);
        assert_eq!(Platform::Na1.cluster(), Cluster::Americas);

        assert_eq!(Platform::Eun1.cluster(), Cluster::Europe);
        assert_eq!(Platform::Euw1.cluster(), Cluster::Europe);
        assert_eq!(Platform::Tr1.cluster(), Cluster::Europe);
        assert_eq!(Platform::Ru.cluster(), Cluster::Europe);

        assert_eq!(Platform::Jp1.cluster(), Cluster::Asia);
        assert_eq!(Platform::Kr.cluster(), Cluster::Asia);

        assert_eq!(Platform::Oc1.cluster(), Cluster::Sea);
        assert_eq!(Platform::Ph2.cluster(), Cluster::Sea);
        assert_eq!(Platform::Sg2.cluster(), Cluster::Sea);
        assert_eq!(Platform::Th2.cluster(), Cluster::Sea);
        assert_eq!(Platform::Tw2.cluster(), Cluster::Sea);
        assert_eq!(Platform::Vn2.cluster(), Cluster::Sea);
    }

    #[test]
    fn test_account_cluster_routes_sea_through_asia() {
        assert_eq!(Platform::Oc1.account_cluster(), Cluster::Asia);
        assert_eq!(Platform::Vn2.account_cluster(), Cluster::Asia);

        // Other platforms keep their match cluster
        assert_eq!(Platform::Na1.account_cluster(), Cluster::Americas);
        assert_eq!(Platform::Euw1.account_cluster(), Cluster::Europe);
        assert_eq!(Platform::Kr.account_cluster(), Cluster::Asia);
    }

    #[test]
    fn test_from_str_accepts_any_case() {
        assert_eq!(Platform::from_str("na1"), Some(Platform::Na1));
        assert_eq!(Platform::from_str("NA1"), Some(Platform::Na1));
        assert_eq!(Platform::from_str("EuW1"), Some(Platform::Euw1));
        assert_eq!(Platform::from_str("  kr  "), Some(Platform::Kr));
    }

    #[test]
    fn test_from_str_rejects_unknown_values() {
        assert_eq!(Platform::from_str("euw"), None);
        assert_eq!(Platform::from_str("americas"), None);
        assert_eq!(Platform::from_str(""), None);
    }

    #[test]
    fn test_round_trip_through_as_str() {
        for platform in Platform::all() {
            assert_eq!(Platform::from_str(platform.as_str()), Some(*platform));
        }
    }

    #[test]
    fn test_display_is_uppercase_as_str() {
        for platform in Platform::all() {
            assert_eq!(platform.display(), platform.as_str().to_uppercase());
        }
    }

    #[test]
    fn test_cluster_as_str() {
        assert_eq!(Cluster::Americas.as_str(), "americas");
        assert_eq!(Cluster::Europe.as_str(), "europe");
        assert_eq!(Cluster::Asia.as_str(), "asia");
        assert_eq!(Cluster::Sea.as_str(), "sea");
    }
}
