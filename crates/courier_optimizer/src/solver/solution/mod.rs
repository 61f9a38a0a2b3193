pub mod route;
pub mod route_change;
pub mod route_id;
pub mod working_solution;
