pub mod mr;
pub mod mragg;
