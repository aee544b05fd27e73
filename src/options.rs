//! Session configuration options.

/// Configuration options for a play session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_wallet(500)
///     .with_starting_high_score(750);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Wallet balance the session starts with.
    pub starting_wallet: i64,
    /// High score the session starts with.
    ///
    /// The engine never reports a high score below the starting wallet.
    pub starting_high_score: i64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_wallet: 1000,
            starting_high_score: 100,
        }
    }
}

impl SessionOptions {
    /// Sets the starting wallet balance.
    ///
    /// A balance of zero or less starts the session already over.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_wallet(250);
    /// assert_eq!(options.starting_wallet, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_wallet(mut self, wallet: i64) -> Self {
        self.starting_wallet = wallet;
        self
    }

    /// Sets the starting high score.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_high_score(5000);
    /// assert_eq!(options.starting_high_score, 5000);
    /// ```
    #[must_use]
    pub const fn with_starting_high_score(mut self, high_score: i64) -> Self {
        self.starting_high_score = high_score;
        self
    }
}
