//! Language front-ends that lower syntax trees into `CallSite` events.

pub mod go;
