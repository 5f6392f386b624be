use std::fmt::Display;

/// The closed-form sufficient conditions a [`BaselineSolver`](super::BaselineSolver) may try
/// before falling back to exhaustive search.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Theorem {
    /// Local connectivity from minimum degree or degree sums of non-adjacent pairs
    ChartrandPippert1974,
    /// Hamiltonian cycle from `δ ≥ ⌈n/2⌉`
    Dirac1952,
    /// Hamiltonian cycle from degree sums of non-adjacent pairs
    Ore1960,
    /// Hamiltonian cycle from counts of low-degree nodes
    Posa1963,
    /// Hamiltonian cycle from the sorted degree sequence
    Chvatal1972,
    /// Hamiltonian cycle from a complete Bondy–Chvátal closure
    BondyChvatal1974,
    /// Hamiltonian cycle in connected, locally connected, claw-free graphs
    OberlySummer1979,
}

impl Theorem {
    /// All theorems, Hamiltonian cycle conditions in the order they are tried
    pub const ALL: [Theorem; 7] = [
        Theorem::ChartrandPippert1974,
        Theorem::Dirac1952,
        Theorem::Ore1960,
        Theorem::Posa1963,
        Theorem::Chvatal1972,
        Theorem::BondyChvatal1974,
        Theorem::OberlySummer1979,
    ];
}

impl Display for Theorem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Theorem::ChartrandPippert1974 => "Chartrand-Pippert (1974)",
            Theorem::Dirac1952 => "Dirac (1952)",
            Theorem::Ore1960 => "Ore (1960)",
            Theorem::Posa1963 => "Pósa (1963)",
            Theorem::Chvatal1972 => "Chvátal (1972)",
            Theorem::BondyChvatal1974 => "Bondy-Chvátal (1974)",
            Theorem::OberlySummer1979 => "Oberly-Summer (1979)",
        };
        f.write_str(name)
    }
}

/// Configures which sufficient conditions a solver may use.
///
/// Disabling a theorem never changes an answer, only whether it is found by a closed-form check
/// or by exhaustive search.
///
/// ```
/// use uprops::solver::*;
///
/// let config = SolverConfig::new()
///     .disable(Theorem::BondyChvatal1974)
///     .disable(Theorem::OberlySummer1979);
///
/// assert!(config.is_enabled(Theorem::Dirac1952));
/// assert!(!config.is_enabled(Theorem::BondyChvatal1974));
/// assert!(!SolverConfig::exhaustive_only().is_enabled(Theorem::Dirac1952));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    enabled_theorems: Vec<Theorem>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverConfig {
    /// Creates a new config with all theorems enabled
    pub fn new() -> Self {
        Self {
            enabled_theorems: Theorem::ALL.to_vec(),
        }
    }

    /// Creates a config with every theorem disabled, i.e. every query is answered exhaustively
    pub fn exhaustive_only() -> Self {
        Self {
            enabled_theorems: Vec::new(),
        }
    }

    /// Enables a specific theorem if it's not already enabled.
    pub fn enable(mut self, theorem: Theorem) -> Self {
        if !self.enabled_theorems.contains(&theorem) {
            self.enabled_theorems.push(theorem);
        }
        self
    }

    /// Disables a specific theorem if it's currently enabled.
    pub fn disable(mut self, theorem: Theorem) -> Self {
        if let Some(index) = self
            .enabled_theorems
            .iter()
            .position(|value| *value == theorem)
        {
            self.enabled_theorems.swap_remove(index);
        }
        self
    }

    /// Returns *true* if `theorem` may be used
    pub fn is_enabled(&self, theorem: Theorem) -> bool {
        self.enabled_theorems.contains(&theorem)
    }
}
