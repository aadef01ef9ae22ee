//! Game configuration options.

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hole21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_dealer_stands_on(18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks shuffled into the draw pile.
    pub decks: u8,
    /// The house keeps drawing while its score is below this value.
    pub dealer_stands_on: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use hole21::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the score at which the house stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use hole21::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u32) -> Self {
        self.dealer_stands_on = score;
        self
    }
}
