pub mod jmdict;
