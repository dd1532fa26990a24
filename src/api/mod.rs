pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod types;

pub use routes::create_router;
pub use server::ApiServer;
pub use state::{AppState, ShutdownHandle};
pub use types::ApiError;
