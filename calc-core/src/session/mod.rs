pub mod config;
pub mod session;

pub mod prelude {
    pub use super::{
        config::*,
        session::*
    };
}

#[cfg(test)]
mod tests;
