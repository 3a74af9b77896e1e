pub mod bitmap;
pub mod classify;
pub mod encode;
pub mod index;
pub mod output;
pub mod ranges;
pub mod tables;
