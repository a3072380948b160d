// Adapters layer: concrete implementations for external systems
// (filesystem storage, the PDF rendering library).

pub mod renderer;
pub mod storage;
