//! CSV table reading and result writing.

mod table;
mod writer;

pub use table::{read_table, read_table_from_reader, Table};
pub use writer::{render_result, write_result, RANK_COLUMN, SCORE_COLUMN};
