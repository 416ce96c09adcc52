pub mod graphs_reader;
pub mod report;

pub use graphs_reader::{load_graphs, GraphsFile};
pub use report::{write_csv_report, write_json_report, Report};
