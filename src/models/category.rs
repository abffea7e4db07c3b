//! Spending/income categories
//!
//! Categories form a closed set: the Normalizer rejects anything outside it
//! rather than defaulting, so typos in a free-text backend surface as
//! validation errors instead of silently polluting the breakdown charts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Housing,
    Food,
    Transport,
    Leisure,
    Health,
    Education,
    Income,
    Investment,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 9] = [
        Category::Housing,
        Category::Food,
        Category::Transport,
        Category::Leisure,
        Category::Health,
        Category::Education,
        Category::Income,
        Category::Investment,
        Category::Other,
    ];

    /// Canonical name, used for display and export
    pub fn name(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Leisure => "Leisure",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Income => "Income",
            Category::Investment => "Investment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive match on the canonical name, plus the Portuguese
    /// labels the original spreadsheet backend stored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "housing" | "habitação" | "habitacao" => Ok(Category::Housing),
            "food" | "alimentação" | "alimentacao" => Ok(Category::Food),
            "transport" | "transporte" => Ok(Category::Transport),
            "leisure" | "lazer" => Ok(Category::Leisure),
            "health" | "saúde" | "saude" => Ok(Category::Health),
            "education" | "educação" | "educacao" => Ok(Category::Education),
            "income" | "receita" => Ok(Category::Income),
            "investment" | "investimento" => Ok(Category::Investment),
            "other" | "outros" => Ok(Category::Other),
            _ => Err(format!("unknown category: '{}'", s.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for cat in Category::ALL {
            assert_eq!(cat.name().parse::<Category>().unwrap(), cat);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!("FOOD".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("  housing ".parse::<Category>().unwrap(), Category::Housing);
    }

    #[test]
    fn test_portuguese_aliases() {
        assert_eq!("Habitação".parse::<Category>().unwrap(), Category::Housing);
        assert_eq!("Alimentação".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Lazer".parse::<Category>().unwrap(), Category::Leisure);
        assert_eq!("Receita".parse::<Category>().unwrap(), Category::Income);
        assert_eq!("Outros".parse::<Category>().unwrap(), Category::Other);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("Groceries".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }
}
