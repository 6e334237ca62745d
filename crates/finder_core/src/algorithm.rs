use std::fmt;

/// Similarity algorithms offered by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Hss,
    RatioHss,
    Wl,
    Hybrid,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Hss,
        Algorithm::RatioHss,
        Algorithm::Wl,
        Algorithm::Hybrid,
    ];

    /// Machine value sent over the wire.
    pub fn value(self) -> &'static str {
        match self {
            Algorithm::Hss => "hss",
            Algorithm::RatioHss => "ratio_hss",
            Algorithm::Wl => "wl",
            Algorithm::Hybrid => "hybrid",
        }
    }

    /// Presentation-only label.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Hss => "HSS",
            Algorithm::RatioHss => "Ratio HSS",
            Algorithm::Wl => "WL + Node2Vec",
            Algorithm::Hybrid => "Hybrid SimRank Fusion",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algo| algo.value() == value)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmOption {
    pub algorithm: Algorithm,
    pub value: &'static str,
    pub label: &'static str,
}

impl AlgorithmOption {
    const fn new(algorithm: Algorithm, value: &'static str, label: &'static str) -> Self {
        Self {
            algorithm,
            value,
            label,
        }
    }

    /// Case-insensitive match of `query` against the label or the machine value.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.label.to_lowercase().contains(&query)
            || self.value.contains(&query)
    }
}

/// Options shown by the algorithm picker, in display order.
pub const ALGORITHM_OPTIONS: [AlgorithmOption; 4] = [
    AlgorithmOption::new(Algorithm::Hss, "hss", "HSS"),
    AlgorithmOption::new(Algorithm::RatioHss, "ratio_hss", "Ratio HSS"),
    AlgorithmOption::new(Algorithm::Wl, "wl", "WL + Node2Vec"),
    AlgorithmOption::new(Algorithm::Hybrid, "hybrid", "Hybrid SimRank Fusion"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_agree_with_enum() {
        for option in ALGORITHM_OPTIONS {
            assert_eq!(option.algorithm.value(), option.value);
            assert_eq!(option.algorithm.label(), option.label);
            assert_eq!(Algorithm::from_value(option.value), Some(option.algorithm));
        }
        assert_eq!(Algorithm::from_value("HSS"), None);
    }

    #[test]
    fn option_matching_uses_label_and_value() {
        let wl = ALGORITHM_OPTIONS[2];
        assert!(wl.matches("node2"));
        assert!(wl.matches("WL"));
        assert!(wl.matches(""));
        assert!(!wl.matches("ratio"));
        assert!(ALGORITHM_OPTIONS[1].matches("ratio_"));
    }
}
