mod output;

pub use output::RecordFileManager;
