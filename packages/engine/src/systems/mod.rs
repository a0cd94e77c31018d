pub mod body;
pub mod physics;
pub mod pointer;
