//! YAML Quandary Loader
//!
//! Reads a quandary from a YAML document with four blocks:
//!
//! ```yaml
//! quandary:
//!   description: Which fruit?
//! choices:
//!   a: {name: Apple}
//!   b: {name: Banana}
//! criteria:
//!   x:
//!     name: Taste
//!     ratings: "a------------------b"
//! priorities:
//!   ratings: "-------------------x"
//! ```
//!
//! The document is walked as a `serde_yaml::Value` so mapping order is kept:
//! the order of `choices` and `criteria` entries is the tie-breaking order.

use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::domain::foundation::{ChoiceId, CriterionId, OrderedMap, Rating, ValidationError};
use crate::domain::quandary::{
    ChoicesMap, CriteriaMap, Criterion, PriorityRatings, Quandary, RatingsBar,
};
use crate::ports::{LoadError, QuandaryLoader};

const QUANDARY_BLOCK: &str = "quandary";
const CHOICES_BLOCK: &str = "choices";
const CRITERIA_BLOCK: &str = "criteria";
const PRIORITIES_BLOCK: &str = "priorities";
const PRIORITIES_RATINGS: &str = "priorities.ratings";

/// Loads quandaries from YAML files.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlQuandaryLoader;

impl YamlQuandaryLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Parses and validates a quandary from YAML text.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found, walking the blocks in the
    /// order quandary, choices, criteria, priorities, then any completeness
    /// violation reported by `Quandary::validate`.
    pub fn parse_str(&self, text: &str) -> Result<Quandary, LoadError> {
        let document: Value = serde_yaml::from_str(text)?;
        let Value::Mapping(root) = document else {
            return Err(LoadError::NotAMapping);
        };

        let description = parse_description(&root)?;
        let choices = parse_choices(&root)?;
        let criteria = parse_criteria(&root)?;
        let priorities = parse_priorities(&root)?;

        debug!(
            choices = choices.len(),
            criteria = criteria.len(),
            "Quandary document parsed"
        );

        let quandary = Quandary::new(description, choices, criteria, priorities);
        quandary.validate()?;
        Ok(quandary)
    }
}

impl QuandaryLoader for YamlQuandaryLoader {
    fn load(&self, path: &Path) -> Result<Quandary, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        self.parse_str(&text)
    }
}

fn block<'a>(root: &'a Mapping, name: &str) -> Result<&'a Mapping, LoadError> {
    root.get(name)
        .ok_or_else(|| LoadError::MissingBlock(name.to_string()))?
        .as_mapping()
        .ok_or_else(|| LoadError::BlockNotMapping(name.to_string()))
}

fn parse_description(root: &Mapping) -> Result<String, LoadError> {
    let quandary = block(root, QUANDARY_BLOCK)?;
    quandary
        .get("description")
        .map(display_text)
        .ok_or_else(|| {
            LoadError::missing_element(format!("configuration.{}", QUANDARY_BLOCK), "description")
        })
}

fn parse_choices(root: &Mapping) -> Result<ChoicesMap, LoadError> {
    let mut choices = ChoicesMap::new();
    for (key, value) in block(root, CHOICES_BLOCK)? {
        let id = ChoiceId::new(entry_key(key, CHOICES_BLOCK)?)
            .map_err(|_| invalid_key(CHOICES_BLOCK))?;
        let context = format!("Choice \"{}\"", id);
        let entry = value
            .as_mapping()
            .ok_or_else(|| LoadError::EntryNotMapping(context.clone()))?;
        let name = entry
            .get("name")
            .ok_or_else(|| LoadError::missing_element(context, "name"))?;
        choices.insert(id, display_text(name));
    }
    Ok(choices)
}

fn parse_criteria(root: &Mapping) -> Result<CriteriaMap, LoadError> {
    let mut criteria = CriteriaMap::new();
    for (key, value) in block(root, CRITERIA_BLOCK)? {
        let id = CriterionId::new(entry_key(key, CRITERIA_BLOCK)?)
            .map_err(|_| invalid_key(CRITERIA_BLOCK))?;
        let context = format!("criterion.{}", id);
        let ratings_context = format!("{}.ratings", context);

        let entry = value
            .as_mapping()
            .ok_or_else(|| LoadError::EntryNotMapping(context.clone()))?;
        let name = entry
            .get("name")
            .ok_or_else(|| LoadError::missing_element(context, "name"))?;
        let bar = entry
            .get("ratings")
            .ok_or_else(|| LoadError::MissingRatingsBar(ratings_context.clone()))?;

        let choice_ratings = parse_ratings(&ratings_context, bar, |letter| ChoiceId::new(letter))?;
        criteria.insert(id, Criterion::new(display_text(name), choice_ratings));
    }
    Ok(criteria)
}

fn parse_priorities(root: &Mapping) -> Result<PriorityRatings, LoadError> {
    let bar = block(root, PRIORITIES_BLOCK)?
        .get("ratings")
        .ok_or_else(|| LoadError::MissingRatingsBar(PRIORITIES_RATINGS.to_string()))?;
    parse_ratings(PRIORITIES_RATINGS, bar, |letter| CriterionId::new(letter))
}

fn parse_ratings<K, F>(
    context: &str,
    value: &Value,
    make_id: F,
) -> Result<OrderedMap<K, Rating>, LoadError>
where
    K: Clone + Eq + std::hash::Hash,
    F: Fn(&str) -> Result<K, ValidationError>,
{
    let text = value
        .as_str()
        .ok_or_else(|| LoadError::RatingsBarNotString(context.to_string()))?;
    RatingsBar::parse(text)
        .and_then(|bar| bar.keyed_by(make_id))
        .map_err(|e| LoadError::ratings_bar(context, e))
}

/// Text of a mapping key. Only scalars make sense as identifiers.
fn entry_key(key: &Value, block_name: &str) -> Result<String, LoadError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(invalid_key(block_name)),
    }
}

fn invalid_key(block_name: &str) -> LoadError {
    LoadError::InvalidKey(format!("configuration.{}", block_name))
}

/// Renders a YAML value as display text.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => display_text(&tagged.value),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
