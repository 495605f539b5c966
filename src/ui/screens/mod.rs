pub mod browse;
pub mod help;
