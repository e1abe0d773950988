pub mod trace;

pub use trace::TraceLayer;
