pub mod node;
pub mod time_dimension;
pub mod time_slot;
pub mod time_window;
pub mod travel_time_matrix;
pub mod vehicle;
pub mod vehicle_routing_problem;
