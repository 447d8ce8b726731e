// File operation traits and implementations
pub mod copy;
pub mod delete;
pub mod list;
pub mod mv;

pub use copy::Copier;
pub use delete::Deleter;
pub use list::Lister;
pub use mv::Mover;
