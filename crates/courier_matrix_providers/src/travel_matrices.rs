use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Travel times in seconds between every pair of addresses.
/// `times[from][to]`, rows follow the order of the requested addresses.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TravelMatrices {
    pub times: Vec<Vec<i64>>,
}

impl TravelMatrices {
    pub fn new(times: Vec<Vec<i64>>) -> Self {
        TravelMatrices { times }
    }

    pub fn num_locations(&self) -> usize {
        self.times.len()
    }

    pub fn is_square(&self) -> bool {
        let n = self.times.len();
        self.times.iter().all(|row| row.len() == n)
    }

    pub fn into_times(self) -> Vec<Vec<i64>> {
        self.times
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_square() {
        let matrices = TravelMatrices::new(vec![vec![0, 1], vec![1, 0]]);
        assert!(matrices.is_square());
        assert_eq!(matrices.num_locations(), 2);

        let matrices = TravelMatrices::new(vec![vec![0, 1, 2], vec![1, 0, 2]]);
        assert!(!matrices.is_square());
    }
}
