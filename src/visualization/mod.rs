mod tables;

pub use tables::{
    format_panel_table, print_panel_table,
    format_country_block, print_country_block,
    format_summary_table, print_summary_table,
};
