pub mod config {
    pub mod env_loader;
    pub mod model;
}

pub mod schedule {
    pub mod api;
    pub mod dto;
    pub mod filter;
    pub mod model;
    pub mod paginator;
    pub mod sort;
    pub mod view;
}

pub mod speakers {
    pub mod carousel;
    pub mod model;
}

pub mod tracing;
pub mod viewport;
