pub mod direction;
pub mod event;
pub mod geometry;
pub mod motion;
pub mod resolve;
