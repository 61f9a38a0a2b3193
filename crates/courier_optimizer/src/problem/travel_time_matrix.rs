use crate::error::InstanceError;

use super::node::NodeIdx;

pub type Seconds = i64;
pub type Cost = i64;

/// Travel times between nodes, stored flat: `index = from * num_nodes + to`.
#[derive(Debug, Clone)]
pub struct TravelTimeMatrix {
    times: Vec<Seconds>,
    num_nodes: usize,
}

impl TravelTimeMatrix {
    pub fn from_rows(rows: Vec<Vec<Seconds>>) -> Result<Self, InstanceError> {
        let num_nodes = rows.len();

        if num_nodes == 0 {
            return Err(InstanceError::EmptyMatrix);
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != num_nodes {
                return Err(InstanceError::NonSquareMatrix {
                    row,
                    expected: num_nodes,
                    actual: values.len(),
                });
            }

            if let Some(to) = values.iter().position(|&time| time < 0) {
                return Err(InstanceError::NegativeTravelTime {
                    from: NodeIdx::new(row),
                    to: NodeIdx::new(to),
                });
            }
        }

        Ok(TravelTimeMatrix {
            times: rows.into_iter().flatten().collect(),
            num_nodes,
        })
    }

    #[inline(always)]
    fn index(&self, from: NodeIdx, to: NodeIdx) -> usize {
        from.get() * self.num_nodes + to.get()
    }

    /// The diagonal is always zero, whatever the input said.
    #[inline(always)]
    pub fn travel_time(&self, from: NodeIdx, to: NodeIdx) -> Seconds {
        if from == to {
            return 0;
        }

        self.times[self.index(from, to)]
    }

    pub fn max_travel_time_from(&self, from: NodeIdx) -> Seconds {
        let start = from.get() * self.num_nodes;
        self.times[start..start + self.num_nodes]
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let matrix = TravelTimeMatrix::from_rows(vec![vec![5, 10], vec![20, 0]]).unwrap();

        assert_eq!(matrix.num_nodes(), 2);
        assert_eq!(matrix.travel_time(NodeIdx::new(0), NodeIdx::new(1)), 10);
        assert_eq!(matrix.travel_time(NodeIdx::new(1), NodeIdx::new(0)), 20);
        assert_eq!(matrix.travel_time(NodeIdx::new(0), NodeIdx::new(0)), 0);
        assert_eq!(matrix.max_travel_time_from(NodeIdx::new(1)), 20);
    }

    #[test]
    fn test_non_square() {
        let result = TravelTimeMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 2]]);

        assert_eq!(
            result.unwrap_err(),
            InstanceError::NonSquareMatrix {
                row: 0,
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_empty_and_negative() {
        assert_eq!(
            TravelTimeMatrix::from_rows(vec![]).unwrap_err(),
            InstanceError::EmptyMatrix
        );

        assert_eq!(
            TravelTimeMatrix::from_rows(vec![vec![0, -1], vec![1, 0]]).unwrap_err(),
            InstanceError::NegativeTravelTime {
                from: NodeIdx::new(0),
                to: NodeIdx::new(1)
            }
        );
    }
}
