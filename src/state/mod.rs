pub mod auth_state;
pub mod selection_state;
pub mod session;

pub use auth_state::{AuthState, TokenData};
pub use selection_state::SelectionState;
pub use session::Session;
