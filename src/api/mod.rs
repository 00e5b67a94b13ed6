pub mod routes;
pub mod handlers;
pub mod types;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
