pub mod activate;
pub mod arc_penalties;
pub mod deactivate;
pub mod exchange_inactive;
pub mod guided_local_search;
pub mod inter_relocate;
pub mod inter_swap;
pub mod local_search;
pub mod r#move;
pub mod relocate;
pub mod swap;
pub mod two_opt;
