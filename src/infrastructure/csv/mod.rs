// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV export of the parsed grade table

mod csv_writer;

pub use csv_writer::CsvWriter;
