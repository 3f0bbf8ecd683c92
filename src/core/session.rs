//! Session loop: filters → load → reports → raw rows → restart.

use crate::cli::prompt::{Prompter, RESTART_QUESTION, ROWS_QUESTION, get_filters};
use crate::config::Config;
use crate::core::loader::load_data;
use crate::core::pager::{RowPager, render_rows};
use crate::core::report;
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;
use crate::ui::messages::{info, warning};
use std::io::{BufRead, Write};

/// Page through `table` while the user keeps answering "yes".
pub fn display_raw_data<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    table: &TripTable,
    page_size: usize,
) -> AppResult<()> {
    let mut pager = RowPager::new(page_size);

    while p.confirm(ROWS_QUESTION)? {
        let (offset, rows) = pager.next_page(table);
        if rows.is_empty() {
            info(p.output(), "No more rows to display.")?;
        } else {
            write!(p.output(), "{}", render_rows(table, offset, rows))?;
        }
    }

    Ok(())
}

/// Run one analysis pass for each restart the user asks for.
pub fn run_session<R: BufRead, W: Write>(cfg: &Config, p: &mut Prompter<R, W>) -> AppResult<()> {
    loop {
        let filters = match get_filters(p) {
            Ok(f) => f,
            Err(AppError::InputClosed) => {
                log::debug!("input closed while collecting filters");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let table = load_data(cfg.data_dir(), &filters, cfg.day_filter)?;
        if table.is_empty() {
            warning(p.output(), format!("No trips match {filters}"))?;
        }

        report::print_all(p.output(), &table)?;
        display_raw_data(p, &table, cfg.page_size)?;

        if !p.confirm(RESTART_QUESTION)? {
            break;
        }
    }

    Ok(())
}
