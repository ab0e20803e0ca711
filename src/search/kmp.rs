//! Knuth-Morris-Pratt automaton over decimal digits

/// Streaming KMP matcher for a fixed, non-empty pattern
#[derive(Debug, Clone)]
pub struct Kmp {
    pattern: Vec<u8>,
    failure: Vec<usize>,
    state: usize,
}

impl Kmp {
    /// Build the automaton. `pattern` must not be empty.
    pub fn new(pattern: &[u8]) -> Self {
        debug_assert!(!pattern.is_empty(), "KMP pattern must not be empty");
        Self {
            pattern: pattern.to_vec(),
            failure: failure_table(pattern),
            state: 0,
        }
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Forget any partial match
    pub fn reset(&mut self) {
        self.state = 0;
    }

    /// Feed one digit; returns true when it completes a match.
    ///
    /// After a match the automaton keeps the longest proper border of the
    /// pattern, so overlapping matches are all reported.
    pub fn feed(&mut self, digit: u8) -> bool {
        while self.state > 0 && self.pattern[self.state] != digit {
            self.state = self.failure[self.state - 1];
        }
        if self.pattern[self.state] == digit {
            self.state += 1;
        }
        if self.state == self.pattern.len() {
            self.state = self.failure[self.state - 1];
            return true;
        }
        false
    }
}

/// `failure[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = failure[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        failure[i] = k;
    }
    failure
}
