pub mod neighbor;
