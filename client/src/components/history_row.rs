use leptos::prelude::*;

use crate::net::types::HistoryEntry;
use crate::util::format::{format_brl, format_date, format_time};

/// Row of the history table; odd rows are striped.
#[component]
pub fn HistoryRow(entry: HistoryEntry, index: usize) -> impl IntoView {
    view! {
        <tr class="history-row" class:history-row--striped={index % 2 == 1}>
            <td>{format!("#{}", entry.id)}</td>
            <td>{entry.mesa.numero}</td>
            <td>{format_date(&entry.created_at)}</td>
            <td>{format_time(&entry.created_at)}</td>
            <td>{format_brl(entry.valor_total)}</td>
        </tr>
    }
}
