//! Enchantment tier carried by an API identifier.
//!
//! Identifiers for enchanted variants end in `@1`, `@2` or `@3`
//! (e.g. `T4_MEAL_OMELETTE@2`). The same suffix is appended to the display
//! name so each variant gets its own key in the mapping table.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    #[default]
    Base,
    Tier1,
    Tier2,
    Tier3,
}

impl Tier {
    /// Parses the tier from the trailing `@N` suffix of an identifier.
    ///
    /// Only a final `@1`, `@2` or `@3` counts. `@` inside the identifier,
    /// other levels (`@0`, `@4`, `@10`) and identifiers without `@` are `Base`.
    pub fn from_identifier(identifier: &str) -> Tier {
        match identifier.rsplit_once('@') {
            Some((stem, "1")) if !stem.is_empty() => Tier::Tier1,
            Some((stem, "2")) if !stem.is_empty() => Tier::Tier2,
            Some((stem, "3")) if !stem.is_empty() => Tier::Tier3,
            _ => Tier::Base,
        }
    }

    /// The tag appended to display names: `""` for `Base`, else `"@N"`.
    pub fn suffix(self) -> &'static str {
        match self {
            Tier::Base => "",
            Tier::Tier1 => "@1",
            Tier::Tier2 => "@2",
            Tier::Tier3 => "@3",
        }
    }

    /// Builds the composite table key for a display name at this tier.
    pub fn compose_key(self, display_name: &str) -> String {
        format!("{}{}", display_name, self.suffix())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Base => write!(f, "base"),
            other => write!(f, "tier {}", &other.suffix()[1..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_suffix_sets_tier() {
        assert_eq!(Tier::from_identifier("T1_FISH_OMELET_AVALON@1"), Tier::Tier1);
        assert_eq!(Tier::from_identifier("T6_MEAL_STEW@2"), Tier::Tier2);
        assert_eq!(Tier::from_identifier("T8_MEAL_SANDWICH@3"), Tier::Tier3);
    }

    #[test]
    fn no_suffix_is_base() {
        assert_eq!(Tier::from_identifier("T4_MEAL_OMELETTE"), Tier::Base);
        assert_eq!(Tier::from_identifier(""), Tier::Base);
    }

    #[test]
    fn embedded_tag_is_not_a_tier() {
        assert_eq!(Tier::from_identifier("T4_A@1B_C"), Tier::Base);
        assert_eq!(Tier::from_identifier("T4_X@12"), Tier::Base);
        assert_eq!(Tier::from_identifier("T4_X@10"), Tier::Base);
        assert_eq!(Tier::from_identifier("T4_X@4"), Tier::Base);
        assert_eq!(Tier::from_identifier("@1"), Tier::Base);
    }

    #[test]
    fn compose_key_appends_suffix() {
        assert_eq!(Tier::Base.compose_key("Pork Pie"), "Pork Pie");
        assert_eq!(Tier::Tier3.compose_key("Pork Pie"), "Pork Pie@3");
    }

    #[test]
    fn display() {
        assert_eq!(Tier::Base.to_string(), "base");
        assert_eq!(Tier::Tier2.to_string(), "tier 2");
    }
}
