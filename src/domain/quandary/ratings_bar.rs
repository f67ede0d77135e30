//! Ratings bar - compact positional encoding of ratings.
//!
//! A ratings bar is a string such as `"a-----c------------b"`. Each letter's
//! position along the bar becomes its rating: the first column is 0.0, the
//! last column is 1.0. Anything that is not a letter is filler.

use crate::domain::foundation::{OrderedMap, Rating, ValidationError};

/// Narrowest bar accepted, so positions keep a useful resolution.
pub const MINIMUM_RATINGS_BAR_WIDTH: usize = 20;

/// A parsed ratings bar.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingsBar {
    width: usize,
    ratings: OrderedMap<String, Rating>,
}

impl RatingsBar {
    /// Parses a ratings bar.
    ///
    /// Letters are uppercased. A letter that appears twice keeps the position
    /// of its first appearance in iteration order and the rating of its last.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the bar is narrower than
    /// [`MINIMUM_RATINGS_BAR_WIDTH`] characters.
    pub fn parse(bar: &str) -> Result<Self, ValidationError> {
        let width = bar.chars().count();
        if width < MINIMUM_RATINGS_BAR_WIDTH {
            return Err(ValidationError::invalid_format(
                "ratings bar",
                format!(
                    "is not at least {} characters wide (got {})",
                    MINIMUM_RATINGS_BAR_WIDTH, width
                ),
            ));
        }

        let divisor = (width - 1) as f64;
        let ratings = bar
            .chars()
            .enumerate()
            .filter(|(_, c)| c.is_alphabetic())
            .map(|(pos, c)| (c.to_uppercase().collect::<String>(), Rating::clamped(pos as f64 / divisor)))
            .collect();

        Ok(Self { width, ratings })
    }

    /// Width of the bar in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Letter ratings in bar order.
    pub fn ratings(&self) -> &OrderedMap<String, Rating> {
        &self.ratings
    }

    /// Converts letters into typed identifiers, keeping bar order.
    pub fn keyed_by<K, F>(&self, make_id: F) -> Result<OrderedMap<K, Rating>, ValidationError>
    where
        K: Clone + Eq + std::hash::Hash,
        F: Fn(&str) -> Result<K, ValidationError>,
    {
        let mut keyed = OrderedMap::new();
        for (letter, rating) in self.ratings.iter() {
            keyed.insert(make_id(letter)?, *rating);
        }
        Ok(keyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ChoiceId;

    #[test]
    fn parse_rejects_narrow_bar() {
        let err = RatingsBar::parse("a--------b").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(err.to_string().contains("at least 20 characters"));
    }

    #[test]
    fn parse_maps_positions_to_ratings() {
        let bar = RatingsBar::parse("a---------b--------c").unwrap();
        assert_eq!(bar.width(), 20);

        let ratings = bar.ratings();
        assert_eq!(ratings.get(&"A".to_string()).unwrap().value(), 0.0);
        assert!((ratings.get(&"B".to_string()).unwrap().value() - 10.0 / 19.0).abs() < 1e-12);
        assert_eq!(ratings.get(&"C".to_string()).unwrap().value(), 1.0);
    }

    #[test]
    fn parse_keeps_bar_order() {
        let bar = RatingsBar::parse("c-------a----------b").unwrap();
        let letters: Vec<_> = bar.ratings().keys().cloned().collect();
        assert_eq!(letters, vec!["C", "A", "B"]);
    }

    #[test]
    fn parse_uppercases_letters() {
        let bar = RatingsBar::parse("x------------------Y").unwrap();
        assert!(bar.ratings().contains_key(&"X".to_string()));
        assert!(bar.ratings().contains_key(&"Y".to_string()));
    }

    #[test]
    fn repeated_letter_takes_last_rating() {
        let bar = RatingsBar::parse("a------------------a").unwrap();
        assert_eq!(bar.ratings().len(), 1);
        assert_eq!(bar.ratings().get(&"A".to_string()).unwrap().value(), 1.0);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        // 19 box-drawing characters plus one letter: 20 characters, 58 bytes.
        let bar = format!("a{}", "─".repeat(19));
        assert_eq!(RatingsBar::parse(&bar).unwrap().width(), 20);
    }

    #[test]
    fn keyed_by_builds_typed_map() {
        let bar = RatingsBar::parse("b------------------a").unwrap();
        let keyed = bar.keyed_by(|letter| ChoiceId::new(letter)).unwrap();
        let ids: Vec<_> = keyed.keys().map(|id| id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }
}
