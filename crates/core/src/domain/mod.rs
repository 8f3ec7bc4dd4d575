pub mod contract;
pub mod filter;
pub mod recommendation;
