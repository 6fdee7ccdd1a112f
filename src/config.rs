//! Configuration options for the MCTS algorithm
//!
//! This module defines the configuration parameters that control the
//! behavior of the MCTS algorithm.

use std::time::Duration;

use crate::{MCTSError, Result};

/// Configuration for the MCTS algorithm
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use duel_mcts::MCTSConfig;
/// use std::time::Duration;
///
/// let config = MCTSConfig::default()
///     .with_exploration_constant(1.5)
///     .with_num_simulations(2_000)
///     .with_max_time(Duration::from_secs(5))
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MCTSConfig {
    /// Exploration constant for UCB1
    ///
    /// Controls the balance between exploration and exploitation.
    /// The reference value is 1.41, close to sqrt(2).
    pub exploration_constant: f64,

    /// Number of simulations (select, expand, simulate, backpropagate) to run
    ///
    /// Zero is accepted: the search then returns the first legal action.
    pub num_simulations: usize,

    /// Maximum time to run the search
    ///
    /// If set, the search stops after this duration even if not every
    /// simulation has run. The recommendation is still made from the
    /// statistics collected so far.
    pub max_time: Option<Duration>,

    /// Seed for the rollout random source
    ///
    /// Two searches with the same seed, state and configuration make the same
    /// decisions. When unset the generator is seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        MCTSConfig {
            exploration_constant: 1.41,
            num_simulations: 10_000,
            max_time: None,
            seed: None,
        }
    }
}

impl MCTSConfig {
    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the number of simulations
    pub fn with_num_simulations(mut self, simulations: usize) -> Self {
        self.num_simulations = simulations;
        self
    }

    /// Sets the maximum time to run the search
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = Some(duration);
        self
    }

    /// Sets the rollout seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration before a search starts
    ///
    /// # Errors
    ///
    /// [`MCTSError::InvalidConfiguration`] if the exploration constant is
    /// negative or not finite, or if the time budget is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(MCTSError::InvalidConfiguration(format!(
                "exploration constant must be a finite non-negative number, got {}",
                self.exploration_constant
            )));
        }
        if self.max_time == Some(Duration::ZERO) {
            return Err(MCTSError::InvalidConfiguration(
                "time budget must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
