// Library root: the pure dashboard core (loading, filtering, statistics and
// view assembly). Nothing in here touches the terminal.

pub mod comparison;
pub mod config;
pub mod data;
pub mod filter;
pub mod metric;
pub mod stats;
pub mod view;
