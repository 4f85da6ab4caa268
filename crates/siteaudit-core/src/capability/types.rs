//! Role, plan and feature names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// User persona; decides which dashboard widgets are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Studio,
    Seo,
    Owner,
    Agency,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Studio, Role::Seo, Role::Owner, Role::Agency];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Studio => "studio",
            Role::Seo => "seo",
            Role::Owner => "owner",
            Role::Agency => "agency",
        }
    }
}

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Plan {
    Free,
    Pro,
    Agency,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::Agency];

    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
            Plan::Agency => "Agency",
        }
    }
}

/// Gated premium action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "exportCSV")]
    ExportCsv,
    #[serde(rename = "exportPDF")]
    ExportPdf,
    #[serde(rename = "whiteLabel")]
    WhiteLabel,
    #[serde(rename = "multiClient")]
    MultiClient,
    #[serde(rename = "compareAudits")]
    CompareAudits,
    #[serde(rename = "ownerChecklist")]
    OwnerChecklist,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::ExportCsv,
        Feature::ExportPdf,
        Feature::WhiteLabel,
        Feature::MultiClient,
        Feature::CompareAudits,
        Feature::OwnerChecklist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Feature::ExportCsv => "exportCSV",
            Feature::ExportPdf => "exportPDF",
            Feature::WhiteLabel => "whiteLabel",
            Feature::MultiClient => "multiClient",
            Feature::CompareAudits => "compareAudits",
            Feature::OwnerChecklist => "ownerChecklist",
        }
    }
}

macro_rules! display_and_parse {
    ($ty:ident, $err:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            /// Case-insensitive; `-` and `_` are ignored ("export-csv" == "exportCSV").
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = fold_name(s);
                $ty::ALL
                    .into_iter()
                    .find(|v| fold_name(v.as_str()) == wanted)
                    .ok_or_else(|| ParseError::$err(s.to_string()))
            }
        }
    };
}

display_and_parse!(Role, UnknownRole);
display_and_parse!(Plan, UnknownPlan);
display_and_parse!(Feature, UnknownFeature);

fn fold_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roles_and_plans() {
        assert_eq!("agency".parse::<Role>().unwrap(), Role::Agency);
        assert_eq!("SEO".parse::<Role>().unwrap(), Role::Seo);
        assert_eq!("pro".parse::<Plan>().unwrap(), Plan::Pro);
        assert_eq!("Agency".parse::<Plan>().unwrap(), Plan::Agency);
        assert_eq!(
            "admin".parse::<Role>(),
            Err(ParseError::UnknownRole("admin".to_string()))
        );
        assert!("enterprise".parse::<Plan>().is_err());
    }

    #[test]
    fn parse_feature_spellings() {
        assert_eq!("exportCSV".parse::<Feature>().unwrap(), Feature::ExportCsv);
        assert_eq!("export-csv".parse::<Feature>().unwrap(), Feature::ExportCsv);
        assert_eq!("owner_checklist".parse::<Feature>().unwrap(), Feature::OwnerChecklist);
        assert!("darkMode".parse::<Feature>().is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for f in Feature::ALL {
            assert_eq!(f.to_string().parse::<Feature>().unwrap(), f);
        }
        for r in Role::ALL {
            assert_eq!(r.to_string().parse::<Role>().unwrap(), r);
        }
    }
}
