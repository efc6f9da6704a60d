/// Random number adapters
mod std_random_source;

pub use std_random_source::StdRandomSource;
