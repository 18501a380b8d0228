//! # Ticket Rendering
//!
//! Turns cart items into priced ticket lines and the printable receipt.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  &[Item]                                                                │
//! │     │  ticket_line(): discount, line total (rounded to the cent)        │
//! │     ▼                                                                   │
//! │  TicketSummary { lines, item_count, total = Σ rounded line totals }     │
//! │     │  row_cells(): "#", title, "$20.00", "4", "50%", "$40.00"          │
//! │     ▼                                                                   │
//! │  TextTable (header, 6 alignments, rows, footer) ──► String              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty item list renders as `"No items."`, with no table.

use tracing::debug;

use crate::discount::calculate_discount;
use crate::money::Amount;
use crate::table::{Alignment, TextTable};
use crate::types::{Item, TicketLine, TicketSummary};
use crate::EMPTY_TICKET;

/// Column headings, left to right.
pub const HEADER: [&str; 6] = ["#", "Item", "Price", "Quan.", "Discount", "Total"];

/// Column alignments: everything right-aligned except the title.
pub const ALIGNMENTS: [Alignment; 6] = [
    Alignment::Right,
    Alignment::Left,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
];

/// Prices one item.
///
/// `index` is the 1-based position shown in the `#` column.
pub fn ticket_line(index: usize, item: &Item) -> TicketLine {
    let discount_percent = calculate_discount(item.category(), item.quantity());
    let line_total = Amount::line_total(item.unit_price(), item.quantity(), discount_percent);

    TicketLine {
        index,
        title: item.title().to_string(),
        unit_price: item.unit_price(),
        quantity: item.quantity(),
        discount_percent,
        line_total,
    }
}

/// Prices every item and totals them.
///
/// The total is the sum of the already-rounded line totals, so it always
/// equals what the rows add up to on paper. It is carried in an [`Amount`],
/// which cannot wrap however large the lines get.
pub fn summarize(items: &[Item]) -> TicketSummary {
    let lines: Vec<TicketLine> = items
        .iter()
        .enumerate()
        .map(|(i, item)| ticket_line(i + 1, item))
        .collect();
    let total = lines.iter().map(|line| line.line_total).sum::<Amount>();

    TicketSummary {
        item_count: lines.len(),
        lines,
        total,
    }
}

/// `"-"` for no discount, otherwise `"<n>%"`.
pub fn discount_label(percent: u32) -> String {
    if percent == 0 {
        "-".to_string()
    } else {
        format!("{percent}%")
    }
}

fn row_cells(line: &TicketLine) -> [String; 6] {
    [
        line.index.to_string(),
        line.title.clone(),
        line.unit_price.to_string(),
        line.quantity.to_string(),
        discount_label(line.discount_percent),
        line.line_total.to_string(),
    ]
}

/// Renders a computed summary as the ticket text.
pub fn render_summary(summary: &TicketSummary) -> String {
    if summary.lines.is_empty() {
        return EMPTY_TICKET.to_string();
    }

    let footer = [
        summary.item_count.to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        summary.total.to_string(),
    ];

    let ticket = TextTable::new()
        .header(HEADER)
        .alignments(&ALIGNMENTS)
        .rows(summary.lines.iter().map(row_cells))
        .footer(footer)
        .render();

    debug!(
        lines = summary.item_count,
        total = %summary.total,
        "Ticket rendered"
    );

    ticket
}

/// Renders items straight to ticket text.
pub fn render_ticket(items: &[Item]) -> String {
    render_summary(&summarize(items))
}

// =============================================================================
// Unit Tests
// =============================================================================
