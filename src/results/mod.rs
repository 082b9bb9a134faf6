//! Historical draw results: scrape, clean, store, and count.
//!
//! Typical pipeline:
//! ```text
//! load_source → parse_draw_results → filter_sparse_games → ResultsDb::insert_records
//!                                                          ↘ NumberFrequencies
//! ```

mod frequency;
mod html;
mod parse;
mod source;
mod store;

pub use frequency::NumberFrequencies;
pub use html::{extract_tables, Table};
pub use parse::{
    filter_sparse_games, parse_combination, parse_draw_date, parse_draw_results, parse_table,
    DrawRecord,
};
pub use source::load_source;
pub use store::ResultsDb;
