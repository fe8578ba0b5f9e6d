mod state;

pub use state::build_state;
