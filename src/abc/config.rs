//! ABC configuration.
//!
//! [`AbcConfig`] holds all parameters that control the colony loop.

/// Configuration for the Artificial Bee Colony engine.
///
/// # Defaults
///
/// ```
/// use examhive::abc::AbcConfig;
///
/// let config = AbcConfig::default();
/// assert_eq!(config.colony_size, 30);
/// assert_eq!(config.max_cycles, 200);
/// assert_eq!(config.scout_limit, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use examhive::abc::AbcConfig;
///
/// let config = AbcConfig::default()
///     .with_colony_size(50)
///     .with_max_cycles(500)
///     .with_scout_limit(15)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AbcConfig {
    /// Number of food sources (candidate solutions) in the colony.
    ///
    /// Also the number of onlooker trials per cycle. Typical range:
    /// 10–100.
    pub colony_size: usize,

    /// Number of cycles to execute. The engine always runs the full
    /// budget — there is no convergence-based early stopping.
    pub max_cycles: usize,

    /// Trial-counter threshold for the scout phase.
    ///
    /// A member whose counter strictly exceeds this limit is discarded
    /// and regenerated from scratch.
    pub scout_limit: usize,

    /// Whether to generate and evaluate candidates in parallel using
    /// rayon. Results are identical to the sequential mode for a given
    /// seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds, checked at cycle
    /// boundaries. The convergence trace of a run cut short this way is
    /// correspondingly shorter.
    ///
    /// `None` disables time-based termination (the default).
    pub time_limit_ms: Option<u64>,
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            colony_size: 30,
            max_cycles: 200,
            scout_limit: 20,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AbcConfig {
    /// Sets the colony size.
    pub fn with_colony_size(mut self, n: usize) -> Self {
        self.colony_size = n;
        self
    }

    /// Sets the cycle budget.
    pub fn with_max_cycles(mut self, n: usize) -> Self {
        self.max_cycles = n;
        self
    }

    /// Sets the scout limit.
    pub fn with_scout_limit(mut self, limit: usize) -> Self {
        self.scout_limit = limit;
        self
    }

    /// Enables or disables parallel candidate evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.colony_size == 0 {
            return Err("colony_size must be positive".into());
        }
        if self.max_cycles == 0 {
            return Err("max_cycles must be positive".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AbcConfig::default();
        assert_eq!(config.colony_size, 30);
        assert_eq!(config.max_cycles, 200);
        assert_eq!(config.scout_limit, 20);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = AbcConfig::default()
            .with_colony_size(64)
            .with_max_cycles(1000)
            .with_scout_limit(10)
            .with_parallel(false)
            .with_seed(42)
            .with_time_limit_ms(5000);

        assert_eq!(config.colony_size, 64);
        assert_eq!(config.max_cycles, 1000);
        assert_eq!(config.scout_limit, 10);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(5000));
    }

    #[test]
    fn test_validate_ok() {
        assert!(AbcConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_colony() {
        assert!(AbcConfig::default().with_colony_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_cycles() {
        assert!(AbcConfig::default().with_max_cycles(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        assert!(AbcConfig::default()
            .with_time_limit_ms(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_scout_limit_is_valid() {
        // A zero limit just makes scouts regenerate any member that
        // fails a single attempt; it is not a configuration error.
        assert!(AbcConfig::default().with_scout_limit(0).validate().is_ok());
    }
}
