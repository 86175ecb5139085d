/// A lazily extended geometric weight table for RBC: `w[i] = (1 - phi) * phi^i`.
///
/// The persistence parameter is fixed by whichever call extends the table
/// first; later calls with a different `phi` are ignored. Extension is
/// monotone — the table only ever grows, and existing entries never change.
pub struct WeightTable {
    weights: Vec<f64>,
    phi: Option<f64>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self {
            weights: Vec::new(),
            phi: None,
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn phi(&self) -> Option<f64> {
        self.phi
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.weights.get(i).copied()
    }

    /// Grow the table to at least `len` entries. A no-op if already that
    /// long. The first call to ever reach this with a given `phi` pins it
    /// for the table's lifetime.
    pub fn extend(&mut self, len: usize, phi: f64) {
        if len <= self.weights.len() {
            return;
        }

        let phi = *self.phi.get_or_insert(phi);

        self.weights.reserve(len - self.weights.len());
        while self.weights.len() < len {
            let i = self.weights.len();
            let w = (1.0 - phi) * phi.powi(i as i32);
            self.weights.push(w);
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "weights_tests.rs"]
mod tests;
