pub mod csv;

pub use csv::Csv;

pub struct Writer;
