pub mod axes;
pub mod figure;
pub mod pyplot;

// Re-exports.
pub use axes::Axes;
pub use figure::Figure;
pub use pyplot::PyPlot;
