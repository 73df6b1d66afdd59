//! The fixed set of cards a carousel cycles through.

use crate::error::{CarouselError, Result};

/// Ordered, non-empty list of card identifiers.
///
/// The set is fixed for the lifetime of a controller; the carousel only ever
/// needs its length, but the identifiers are kept so hosts can map slides
/// back to the cards they contain.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct CardSet {
    ids: Vec<String>,
}

impl CardSet {
    /// Create a card set from identifiers.
    ///
    /// Fails with [`CarouselError::EmptyCardSet`] when `ids` is empty.
    pub fn new<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Err(CarouselError::EmptyCardSet);
        }
        Ok(Self { ids })
    }

    /// Create a card set of `count` anonymous cards named `card-0`, `card-1`, ...
    pub fn anonymous(count: usize) -> Result<Self> {
        Self::new((0..count).map(|i| format!("card-{i}")))
    }

    /// Number of cards. Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Never `true`: construction rejects empty sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Get the card identifier at the given index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Iterate over card identifiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Cards shown on the given slide when `cards_per_view` cards fit at once.
    ///
    /// The last slide may hold fewer cards. Out-of-range slides are empty.
    pub fn slide_cards(&self, slide: usize, cards_per_view: usize) -> &[String] {
        let per_view = cards_per_view.max(1);
        let start = slide.saturating_mul(per_view).min(self.ids.len());
        let end = start.saturating_add(per_view).min(self.ids.len());
        &self.ids[start..end]
    }
}

impl TryFrom<Vec<String>> for CardSet {
    type Error = CarouselError;

    fn try_from(ids: Vec<String>) -> Result<Self> {
        Self::new(ids)
    }
}

impl From<CardSet> for Vec<String> {
    fn from(cards: CardSet) -> Self {
        cards.ids
    }
}
