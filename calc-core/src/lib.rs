pub mod lexer;
pub mod parser;
pub mod environment;
pub mod eval;
pub mod session;
pub mod utils;

pub use environment::prelude::Value;
pub use session::prelude::{new_session, Session, SessionConfig};
pub use utils::prelude::Error;
