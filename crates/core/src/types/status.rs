//! Enumerations offered as fixed choices in the forms.

use serde::{Deserialize, Deserializer, Serialize};

/// Wardrobe item category.
///
/// `Other` stands in for any category the backend stores that the selector
/// does not offer; it is never produced by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Top,
    Bottom,
    Outerwear,
    Footwear,
    Accessory,
    Other,
}

impl Category {
    /// All categories in the order the selector shows them.
    pub const ALL: [Self; 5] = [
        Self::Top,
        Self::Bottom,
        Self::Outerwear,
        Self::Footwear,
        Self::Accessory,
    ];

    /// Wire and display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Outerwear => "outerwear",
            Self::Footwear => "footwear",
            Self::Accessory => "accessory",
            Self::Other => "other",
        }
    }

    /// Decode a stored category without failing the record around it.
    ///
    /// `null` or a missing value becomes the default; unknown names become
    /// `Other`.
    ///
    /// # Errors
    ///
    /// Returns an error only when the value is neither a string nor `null`.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?
            .map_or_else(Self::default, |name| name.parse().unwrap_or(Self::Other)))
    }

    /// The next choice, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// The previous choice, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}

/// Weather condition for outfit generation.
///
/// `Unset` is the "Select" placeholder and travels as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    #[default]
    #[serde(rename = "")]
    Unset,
    Cold,
    Warm,
    Hot,
    Chilly,
    Rainy,
}

impl Weather {
    /// All choices in selector order, placeholder first.
    pub const ALL: [Self; 6] = [
        Self::Unset,
        Self::Cold,
        Self::Warm,
        Self::Hot,
        Self::Chilly,
        Self::Rainy,
    ];

    /// Wire name (empty for `Unset`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Cold => "cold",
            Self::Warm => "warm",
            Self::Hot => "hot",
            Self::Chilly => "chilly",
            Self::Rainy => "rainy",
        }
    }

    /// Name shown in the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "Select",
            other => other.as_str(),
        }
    }

    /// The next choice, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// The previous choice, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Weather {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| format!("invalid weather: {s}"))
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    all.get((pos + step) % all.len()).copied().unwrap_or(current)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(serde_json::to_string(&Category::Outerwear).unwrap(), "\"outerwear\"");
        let parsed: Category = serde_json::from_str("\"footwear\"").unwrap();
        assert_eq!(parsed, Category::Footwear);
    }

    #[test]
    fn test_category_cycles() {
        assert_eq!(Category::Top.next(), Category::Bottom);
        assert_eq!(Category::Accessory.next(), Category::Top);
        assert_eq!(Category::Top.prev(), Category::Accessory);
    }

    #[test]
    fn test_other_is_not_offered() {
        assert!(!Category::ALL.contains(&Category::Other));
        assert_eq!(Category::Other.next(), Category::Bottom);
    }

    #[test]
    fn test_lenient_category_decoding() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "Category::deserialize_lenient")]
            category: Category,
        }

        let decode = |raw: &str| serde_json::from_str::<Wrapper>(raw).unwrap().category;
        assert_eq!(decode(r#"{"category":"footwear"}"#), Category::Footwear);
        assert_eq!(decode(r#"{"category":"ethnic"}"#), Category::Other);
        assert_eq!(decode(r#"{"category":null}"#), Category::Top);
        assert_eq!(decode("{}"), Category::Top);
        assert!(serde_json::from_str::<Wrapper>(r#"{"category":7}"#).is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("bottom".parse::<Category>().unwrap(), Category::Bottom);
        assert!("hat".parse::<Category>().is_err());
    }

    #[test]
    fn test_weather_unset_is_empty_string() {
        assert_eq!(serde_json::to_string(&Weather::Unset).unwrap(), "\"\"");
        let parsed: Weather = serde_json::from_str("\"\"").unwrap();
        assert_eq!(parsed, Weather::Unset);
    }

    #[test]
    fn test_weather_cycles_through_placeholder() {
        assert_eq!(Weather::Rainy.next(), Weather::Unset);
        assert_eq!(Weather::Unset.prev(), Weather::Rainy);
        assert_eq!(Weather::Unset.label(), "Select");
    }
}
