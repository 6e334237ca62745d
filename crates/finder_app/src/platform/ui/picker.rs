use finder_core::{Algorithm, AlgorithmOption, ALGORITHM_OPTIONS};

/// Searchable list over the fixed algorithm options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgorithmPicker {
    query: String,
    highlighted: usize,
}

impl AlgorithmPicker {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn visible_options(&self) -> Vec<AlgorithmOption> {
        ALGORITHM_OPTIONS
            .into_iter()
            .filter(|option| option.matches(&self.query))
            .collect()
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.highlighted = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.highlighted = 0;
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.visible_options().len();
        if self.highlighted + 1 < count {
            self.highlighted += 1;
        }
    }

    /// Picks the highlighted option and resets the search.
    pub fn choose(&mut self) -> Option<Algorithm> {
        let chosen = self
            .visible_options()
            .get(self.highlighted)
            .map(|option| option.algorithm);
        if chosen.is_some() {
            self.reset();
        }
        chosen
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.highlighted = 0;
    }

    /// Clears the search and highlights `current`, so choosing again keeps it.
    pub fn open_at(&mut self, current: Option<Algorithm>) {
        self.query.clear();
        self.highlighted = current
            .and_then(|algorithm| {
                self.visible_options()
                    .iter()
                    .position(|option| option.algorithm == algorithm)
            })
            .unwrap_or(0);
    }
}
