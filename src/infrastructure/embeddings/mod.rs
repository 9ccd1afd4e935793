pub mod noop;
pub mod voyage;
