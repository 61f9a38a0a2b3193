use serde::Serialize;

use crate::define_index_newtype;

use super::node::{DEPOT, NodeIdx};

define_index_newtype!(VehicleIdx, Vehicle);

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    start: NodeIdx,
    end: NodeIdx,
}

impl Default for Vehicle {
    fn default() -> Self {
        Vehicle {
            start: DEPOT,
            end: DEPOT,
        }
    }
}

impl Vehicle {
    pub fn start(&self) -> NodeIdx {
        self.start
    }

    pub fn end(&self) -> NodeIdx {
        self.end
    }
}
