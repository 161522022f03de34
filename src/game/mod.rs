// Game engine modules

pub mod gesture;
pub mod grid;
pub mod path;
pub mod scorer;
pub mod session;
pub mod validator;

pub use gesture::ShakeDetector;
pub use grid::GridGenerator;
pub use session::{GameEvent, GameSession};
