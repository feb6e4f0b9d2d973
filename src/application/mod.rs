mod application;

pub use application::{Application, ApplicationError};
