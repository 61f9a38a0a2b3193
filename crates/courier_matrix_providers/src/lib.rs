pub mod cache;
pub mod error;
pub mod google_maps_api;
pub mod synthetic;
pub mod travel_matrices;
pub mod travel_matrix_client;
pub mod travel_matrix_provider;
