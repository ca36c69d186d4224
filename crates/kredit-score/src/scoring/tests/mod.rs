mod breakdown;
mod common;
