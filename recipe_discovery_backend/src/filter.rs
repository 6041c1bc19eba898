//! Recipe filtering.
//!
//! A [`FilterCriteria`] is a conjunction of optional constraints. Inactive
//! constraints (an empty title query, the `"all"` sentinel) admit every
//! recipe; active numeric constraints reject recipes whose field is absent.

use recipe_discovery_model::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error as ThisError;
use tracing::{debug, warn};

/// Sentinel selecting every cuisine or disabling a numeric constraint.
pub const ALL: &str = "all";

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum Error {
    #[error("Empty constraint")]
    Empty,
    #[error("Unknown comparator in constraint {0:?}, expected one of '>', '<', '='")]
    Comparator(String),
    #[error("Failed to parse threshold in constraint {0:?}")]
    Threshold(String),
}
type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Encoded as `>`, but inclusive.
    AtLeast,
    /// Encoded as `<`, but inclusive.
    AtMost,
    Equal,
}

impl Comparator {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '>' | '≥' => Some(Comparator::AtLeast),
            '<' | '≤' => Some(Comparator::AtMost),
            '=' => Some(Comparator::Equal),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Comparator::AtLeast => '>',
            Comparator::AtMost => '<',
            Comparator::Equal => '=',
        }
    }

    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparator::AtLeast => value >= threshold,
            Comparator::AtMost => value <= threshold,
            Comparator::Equal => value == threshold,
        }
    }
}

/// A comparator applied to a numeric field, e.g. `>4.5` or `<30`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub comparator: Comparator,
    pub value: f64,
}

impl Threshold {
    pub fn at_least(value: f64) -> Self {
        Threshold {
            comparator: Comparator::AtLeast,
            value,
        }
    }

    pub fn at_most(value: f64) -> Self {
        Threshold {
            comparator: Comparator::AtMost,
            value,
        }
    }

    pub fn equal(value: f64) -> Self {
        Threshold {
            comparator: Comparator::Equal,
            value,
        }
    }

    /// An absent field never satisfies a threshold.
    pub fn admits(&self, field: Option<f64>) -> bool {
        field.map_or(false, |value| self.comparator.holds(value, self.value))
    }
}

impl Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator.symbol(), self.value)
    }
}

impl FromStr for Threshold {
    type Err = Error;

    fn from_str(encoded: &str) -> Result<Self> {
        let encoded = encoded.trim();
        let mut chars = encoded.chars();
        let symbol = chars.next().ok_or(Error::Empty)?;
        let comparator = Comparator::from_symbol(symbol)
            .ok_or_else(|| Error::Comparator(encoded.to_string()))?;
        let value = chars
            .as_str()
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| Error::Threshold(encoded.to_string()))?;
        Ok(Threshold { comparator, value })
    }
}

/// Strict parse of an encoded numeric constraint. `"all"` yields `None`.
pub fn parse_constraint(encoded: &str) -> Result<Option<Threshold>> {
    if encoded.trim() == ALL {
        Ok(None)
    } else {
        encoded.parse().map(Some)
    }
}

/// Lenient parse: malformed encodings disable the constraint.
pub fn parse_constraint_lenient(field: &str, encoded: &str) -> Option<Threshold> {
    parse_constraint(encoded).unwrap_or_else(|err| {
        warn!("ignoring {field} constraint: {err}");
        None
    })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title; empty matches everything.
    pub title: String,
    /// Case-insensitive cuisine label; `None` matches every cuisine.
    pub cuisine: Option<String>,
    pub rating: Option<Threshold>,
    pub total_time: Option<Threshold>,
    pub calories: Option<Threshold>,
}

impl FilterCriteria {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// `"all"` or an empty label clears the cuisine constraint.
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        let cuisine = cuisine.into();
        self.cuisine = if cuisine.is_empty() || cuisine == ALL {
            None
        } else {
            Some(cuisine)
        };
        self
    }

    pub fn with_rating(mut self, threshold: Threshold) -> Self {
        self.rating = Some(threshold);
        self
    }

    pub fn with_total_time(mut self, threshold: Threshold) -> Self {
        self.total_time = Some(threshold);
        self
    }

    pub fn with_calories(mut self, threshold: Threshold) -> Self {
        self.calories = Some(threshold);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self == &FilterCriteria::default()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matcher().matches(recipe)
    }

    pub(crate) fn matcher(&self) -> Matcher<'_> {
        Matcher {
            title: self.title.to_lowercase(),
            cuisine: self
                .cuisine
                .as_deref()
                .filter(|cuisine| !cuisine.is_empty())
                .map(str::to_lowercase),
            criteria: self,
        }
    }
}

/// Criteria with the case-folded strings computed once per filter pass.
pub(crate) struct Matcher<'c> {
    title: String,
    cuisine: Option<String>,
    criteria: &'c FilterCriteria,
}

impl Matcher<'_> {
    pub(crate) fn matches(&self, recipe: &Recipe) -> bool {
        let title_ok = self.title.is_empty() || recipe.title.to_lowercase().contains(&self.title);
        let cuisine_ok = self
            .cuisine
            .as_ref()
            .map_or(true, |cuisine| recipe.cuisine.to_lowercase() == *cuisine);
        title_ok
            && cuisine_ok
            && admits(self.criteria.rating, recipe.rating)
            && admits(
                self.criteria.total_time,
                recipe.total_time.map(f64::from),
            )
            && admits(self.criteria.calories, recipe.nutrients.calories)
    }
}

fn admits(constraint: Option<Threshold>, field: Option<f64>) -> bool {
    constraint.map_or(true, |threshold| threshold.admits(field))
}

/// Filter state as the browsing UI holds it: every constraint is a string,
/// with `"all"` (or an empty title) meaning unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodedFilters {
    pub title: String,
    pub cuisine: String,
    pub rating: String,
    pub total_time: String,
    pub calories: String,
}

impl Default for EncodedFilters {
    fn default() -> Self {
        EncodedFilters {
            title: String::new(),
            cuisine: ALL.into(),
            rating: ALL.into(),
            total_time: ALL.into(),
            calories: ALL.into(),
        }
    }
}

impl EncodedFilters {
    /// Builds criteria, treating malformed numeric constraints as absent.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            rating: parse_constraint_lenient("rating", &self.rating),
            total_time: parse_constraint_lenient("total_time", &self.total_time),
            calories: parse_constraint_lenient("calories", &self.calories),
            ..FilterCriteria::default()
                .with_title(self.title.clone())
                .with_cuisine(self.cuisine.clone())
        }
    }
}

impl From<&FilterCriteria> for EncodedFilters {
    fn from(criteria: &FilterCriteria) -> Self {
        let encode = |threshold: Option<Threshold>| {
            threshold.map_or_else(|| ALL.to_string(), |threshold| threshold.to_string())
        };
        EncodedFilters {
            title: criteria.title.clone(),
            cuisine: criteria.cuisine.clone().unwrap_or_else(|| ALL.into()),
            rating: encode(criteria.rating),
            total_time: encode(criteria.total_time),
            calories: encode(criteria.calories),
        }
    }
}

/// Recipes satisfying every active constraint, in input order.
pub fn filter<'a, I>(recipes: I, criteria: &FilterCriteria) -> Vec<&'a Recipe>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let matcher = criteria.matcher();
    let filtered = recipes
        .into_iter()
        .filter(|recipe| matcher.matches(recipe))
        .collect::<Vec<_>>();
    debug!("filter matched {} recipes", filtered.len());
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_discovery_model::{Nutrients, RecipeId};

    fn recipe(id: &str, title: &str, cuisine: &str, rating: Option<f64>) -> Recipe {
        Recipe {
            id: RecipeId::from(id),
            title: title.into(),
            cuisine: cuisine.into(),
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn parses_encoded_thresholds() {
        assert_eq!(">4.5".parse::<Threshold>(), Ok(Threshold::at_least(4.5)));
        assert_eq!("<30".parse::<Threshold>(), Ok(Threshold::at_most(30.0)));
        assert_eq!("=300".parse::<Threshold>(), Ok(Threshold::equal(300.0)));
        assert_eq!("≥4".parse::<Threshold>(), Ok(Threshold::at_least(4.0)));
        assert_eq!("≤ 60".parse::<Threshold>(), Ok(Threshold::at_most(60.0)));
        assert_eq!(parse_constraint("all"), Ok(None));
    }

    #[test]
    fn rejects_malformed_thresholds() {
        assert_eq!("".parse::<Threshold>(), Err(Error::Empty));
        assert_eq!(
            "~30".parse::<Threshold>(),
            Err(Error::Comparator("~30".into()))
        );
        assert_eq!(
            ">abc".parse::<Threshold>(),
            Err(Error::Threshold(">abc".into()))
        );
        assert_eq!(">".parse::<Threshold>(), Err(Error::Threshold(">".into())));
        assert_eq!(
            ">NaN".parse::<Threshold>(),
            Err(Error::Threshold(">NaN".into()))
        );
    }

    #[test]
    fn lenient_parse_fails_open() {
        assert_eq!(parse_constraint_lenient("rating", "four stars"), None);
        assert_eq!(
            parse_constraint_lenient("rating", ">4"),
            Some(Threshold::at_least(4.0))
        );
    }

    #[test]
    fn threshold_display_round_trips_encoding() {
        assert_eq!(Threshold::at_least(4.5).to_string(), ">4.5");
        assert_eq!(Threshold::at_most(30.0).to_string(), "<30");
    }

    #[test]
    fn comparators_are_inclusive() {
        assert!(Threshold::at_most(30.0).admits(Some(30.0)));
        assert!(Threshold::at_least(4.8).admits(Some(4.8)));
        assert!(Threshold::equal(25.0).admits(Some(25.0)));
        assert!(!Threshold::equal(25.0).admits(Some(25.5)));
        assert!(!Threshold::at_most(30.0).admits(Some(30.5)));
    }

    #[test]
    fn absent_fields_fail_active_constraints() {
        assert!(!Threshold::at_most(1000.0).admits(None));
        assert!(!Threshold::at_least(0.0).admits(None));
    }

    #[test]
    fn zero_is_a_value_not_absence() {
        assert!(Threshold::at_most(10.0).admits(Some(0.0)));
        let unrated = recipe("1", "Water", "Any", None);
        let zero = recipe("2", "Burnt Toast", "British", Some(0.0));
        let recipes = [unrated, zero];
        let criteria = FilterCriteria::default().with_rating(Threshold::equal(0.0));
        let ids = filter(&recipes, &criteria)
            .into_iter()
            .map(|recipe| recipe.id.0.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn title_and_cuisine_are_case_insensitive() {
        let recipes = [
            recipe("1", "Green Curry", "Thai", Some(4.0)),
            recipe("2", "Red Curry", "thai", Some(4.0)),
            recipe("3", "Pad See Ew", "Thai", Some(4.0)),
        ];
        let criteria = FilterCriteria::default()
            .with_title("CURRY")
            .with_cuisine("THAI");
        let ids = filter(&recipes, &criteria)
            .into_iter()
            .map(|recipe| recipe.id.0.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn constraints_combine_with_and() {
        let mut quick = recipe("1", "Quick Salad", "Greek", Some(4.9));
        quick.total_time = Some(10);
        quick.nutrients = Nutrients {
            calories: Some(150.0),
            ..Default::default()
        };
        let mut heavy = quick.clone();
        heavy.id = RecipeId::from("2");
        heavy.nutrients.calories = Some(900.0);
        let recipes = [quick, heavy];
        let criteria = FilterCriteria::default()
            .with_rating(Threshold::at_least(4.5))
            .with_total_time(Threshold::at_most(30.0))
            .with_calories(Threshold::at_most(300.0));
        let matched = filter(&recipes, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, RecipeId::from("1"));
    }

    #[test]
    fn empty_cuisine_is_unconstrained() {
        let recipes = [
            recipe("1", "Green Curry", "Thai", None),
            recipe("2", "Margherita", "Italian", None),
        ];
        let encoded = EncodedFilters {
            cuisine: String::new(),
            ..Default::default()
        };
        assert_eq!(encoded.to_criteria().cuisine, None);
        assert_eq!(filter(&recipes, &encoded.to_criteria()).len(), 2);
        let built = FilterCriteria::default().with_cuisine("");
        assert!(built.is_unconstrained());
        let assigned = FilterCriteria {
            cuisine: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter(&recipes, &assigned).len(), 2);
    }

    #[test]
    fn encoded_filters_build_criteria() {
        let encoded = EncodedFilters {
            title: "pizza".into(),
            cuisine: "Italian".into(),
            rating: ">4.5".into(),
            total_time: "<60".into(),
            calories: "bogus".into(),
        };
        let criteria = encoded.to_criteria();
        assert_eq!(criteria.title, "pizza");
        assert_eq!(criteria.cuisine.as_deref(), Some("Italian"));
        assert_eq!(criteria.rating, Some(Threshold::at_least(4.5)));
        assert_eq!(criteria.total_time, Some(Threshold::at_most(60.0)));
        assert_eq!(criteria.calories, None);
        assert!(EncodedFilters::default().to_criteria().is_unconstrained());
    }

    #[test]
    fn criteria_encode_back_to_strings() {
        let criteria = FilterCriteria::default()
            .with_cuisine("Thai")
            .with_calories(Threshold::at_most(400.0));
        let encoded = EncodedFilters::from(&criteria);
        assert_eq!(encoded.cuisine, "Thai");
        assert_eq!(encoded.rating, ALL);
        assert_eq!(encoded.calories, "<400");
        assert_eq!(encoded.to_criteria(), criteria);
    }
}
