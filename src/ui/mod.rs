/// egui rendering of the dashboard sections.
pub mod panels;
pub mod plot;
pub mod table;
