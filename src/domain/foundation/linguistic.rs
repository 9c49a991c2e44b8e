//! Seven-point linguistic scales mapping expert labels to fuzzy numbers.
//!
//! Two fixed vocabularies exist: the importance scale used for criteria
//! weights and the performance scale used for alternative ratings. Both span
//! [0, 1] and neighbouring terms overlap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{TriangularFuzzyNumber, ValidationError};

/// A label from one of the fixed linguistic scales.
pub trait LinguisticTerm: Copy + Default + PartialEq + fmt::Debug + 'static {
    /// Name of the scale, used in validation messages.
    const SCALE: &'static str;

    /// Every term of the scale, lowest first.
    fn all() -> &'static [Self];

    /// Short code as entered by experts (e.g. "MH").
    fn code(&self) -> &'static str;

    /// Human readable label.
    fn label(&self) -> &'static str;

    /// The fuzzy number this term stands for.
    fn fuzzy_number(&self) -> TriangularFuzzyNumber;
}

macro_rules! linguistic_scale {
    (
        $(#[$meta:meta])*
        $name:ident, scale = $scale:literal, default = $default:ident,
        { $( $variant:ident => ($code:literal, $label:literal, [$l:expr, $m:expr, $u:expr]) ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            const TERMS: &'static [$name] = &[$($name::$variant),+];
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl LinguisticTerm for $name {
            const SCALE: &'static str = $scale;

            fn all() -> &'static [Self] {
                Self::TERMS
            }

            fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn fuzzy_number(&self) -> TriangularFuzzyNumber {
                match self {
                    $($name::$variant => TriangularFuzzyNumber { lower: $l, mode: $m, upper: $u },)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let code = s.trim();
                Self::TERMS
                    .iter()
                    .copied()
                    .find(|term| term.code().eq_ignore_ascii_case(code))
                    .ok_or_else(|| {
                        ValidationError::invalid_format(
                            <Self as LinguisticTerm>::SCALE,
                            format!("unknown term '{}'", code),
                        )
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

linguistic_scale! {
    /// Importance of a criterion, used for the fuzzy weights.
    ImportanceTerm, scale = "importance", default = Medium,
    {
        VeryLow => ("VL", "Very Low", [0.0, 0.0, 0.1]),
        Low => ("L", "Low", [0.0, 0.1, 0.3]),
        MediumLow => ("ML", "Medium Low", [0.1, 0.3, 0.5]),
        Medium => ("M", "Medium", [0.3, 0.5, 0.7]),
        MediumHigh => ("MH", "Medium High", [0.5, 0.7, 0.9]),
        High => ("H", "High", [0.7, 0.7, 1.0]),
        VeryHigh => ("VH", "Very High", [0.9, 1.0, 1.0]),
    }
}

linguistic_scale! {
    /// Performance of an alternative on a criterion.
    PerformanceTerm, scale = "performance", default = Fair,
    {
        VeryPoor => ("VP", "Very Poor", [0.0, 0.0, 0.1]),
        Poor => ("P", "Poor", [0.0, 0.1, 0.3]),
        MediumPoor => ("MP", "Medium Poor", [0.1, 0.3, 0.5]),
        Fair => ("F", "Fair", [0.3, 0.5, 0.7]),
        MediumGood => ("MG", "Medium Good", [0.5, 0.7, 0.9]),
        Good => ("G", "Good", [0.7, 0.7, 1.0]),
        VeryGood => ("VG", "Very Good", [0.9, 1.0, 1.0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_have_seven_terms() {
        assert_eq!(ImportanceTerm::all().len(), 7);
        assert_eq!(PerformanceTerm::all().len(), 7);
    }

    #[test]
    fn defaults_are_middle_terms() {
        assert_eq!(ImportanceTerm::default(), ImportanceTerm::Medium);
        assert_eq!(PerformanceTerm::default(), PerformanceTerm::Fair);
        assert_eq!(ImportanceTerm::default().code(), "M");
        assert_eq!(PerformanceTerm::default().code(), "F");
    }

    #[test]
    fn terms_stay_within_unit_interval_and_are_ordered() {
        for term in ImportanceTerm::all() {
            let t = term.fuzzy_number();
            assert!(0.0 <= t.lower && t.lower <= t.mode && t.mode <= t.upper && t.upper <= 1.0);
        }
        for term in PerformanceTerm::all() {
            let t = term.fuzzy_number();
            assert!(0.0 <= t.lower && t.lower <= t.mode && t.mode <= t.upper && t.upper <= 1.0);
        }
    }

    #[test]
    fn lookup_returns_fixed_numbers() {
        assert_eq!(
            ImportanceTerm::MediumHigh.fuzzy_number(),
            TriangularFuzzyNumber::new(0.5, 0.7, 0.9)
        );
        assert_eq!(
            PerformanceTerm::VeryGood.fuzzy_number(),
            TriangularFuzzyNumber::new(0.9, 1.0, 1.0)
        );
        assert_eq!(
            PerformanceTerm::Good.fuzzy_number(),
            TriangularFuzzyNumber::new(0.7, 0.7, 1.0)
        );
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("mh".parse::<ImportanceTerm>().unwrap(), ImportanceTerm::MediumHigh);
        assert_eq!(" VG ".parse::<PerformanceTerm>().unwrap(), PerformanceTerm::VeryGood);
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "XL".parse::<ImportanceTerm>().unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Field 'importance' has invalid format: unknown term 'XL'"
        );
        // Performance codes are not importance codes.
        assert!("VG".parse::<ImportanceTerm>().is_err());
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&ImportanceTerm::VeryLow).unwrap(), "\"VL\"");
        let term: PerformanceTerm = serde_json::from_str("\"MG\"").unwrap();
        assert_eq!(term, PerformanceTerm::MediumGood);
    }

    #[test]
    fn deserializing_unknown_code_fails() {
        assert!(serde_json::from_str::<PerformanceTerm>("\"Excellent\"").is_err());
    }

    #[test]
    fn displays_code() {
        assert_eq!(format!("{}", PerformanceTerm::MediumPoor), "MP");
        assert_eq!(ImportanceTerm::High.label(), "High");
    }
}
