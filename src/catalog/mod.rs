/// Catalog domain - synthetic product listings and the filter/sort pipeline
pub mod domain;
pub mod services;
