/// Performance analysis domain - hardware profiles, scoring and advice
pub mod domain;
pub mod services;
