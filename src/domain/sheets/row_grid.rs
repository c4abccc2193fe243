use serde_json::Value;
use strum::{EnumCount, IntoEnumIterator};

use crate::domain::tickets::ticket::{Ticket, TicketField};

/// Header row followed by one row per ticket, all `TicketField::COUNT` wide.
///
/// Cells are JSON scalars: header and text cells are strings, numeric and
/// boolean ticket fields keep their type.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGrid {
    rows: Vec<Vec<Value>>,
}

impl RowGrid {
    pub const WIDTH: usize = TicketField::COUNT;

    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let mut rows = Vec::with_capacity(tickets.len() + 1);
        rows.push(Self::header());
        rows.extend(tickets.iter().map(Self::ticket_row));
        RowGrid { rows }
    }

    pub fn header() -> Vec<Value> {
        TicketField::headers()
            .into_iter()
            .map(|title| Value::String(title.to_owned()))
            .collect()
    }

    fn ticket_row(ticket: &Ticket) -> Vec<Value> {
        TicketField::iter().map(|field| ticket.cell(field)).collect()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Vec<Value>] {
        &self.rows[1..]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tickets(value: Value) -> Vec<Ticket> {
        serde_json::from_value(value).unwrap()
    }

    fn expected_header() -> Vec<Value> {
        [
            "Name",
            "Type",
            "Status",
            "Priority",
            "Product Area",
            "Platform",
            "Location",
            "Submitter",
            "Client",
            "Start Date",
            "Last Updated",
            "PMR #",
            "PMG #",
            "CPM #",
            "FP Ticket Number",
            "Ticket Thread ID",
            "Summary",
            "Details",
            "Activity",
        ]
        .iter()
        .map(|s| json!(s))
        .collect()
    }

    fn row(cells: &[(usize, Value)]) -> Vec<Value> {
        let mut row = vec![json!(""); RowGrid::WIDTH];
        for (index, value) in cells {
            row[*index] = value.clone();
        }
        row
    }

    #[test]
    fn test_empty_input_has_only_header() {
        let grid = RowGrid::from_tickets(&[]);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.rows()[0], expected_header());
        assert!(grid.data_rows().is_empty());
    }

    #[test]
    fn test_positional_correspondence() {
        let grid = RowGrid::from_tickets(&tickets(json!([
            { "name": "Printer jam", "priority": "High" }
        ])));
        assert_eq!(
            grid.rows()[1],
            row(&[(0, json!("Printer jam")), (3, json!("High"))])
        );
    }

    #[test]
    fn test_end_to_end_example() {
        let grid = RowGrid::from_tickets(&tickets(json!([
            { "name": "A", "type": "Bug" },
            { "name": "B", "status": "Open" }
        ])));
        assert_eq!(
            grid.into_rows(),
            vec![
                expected_header(),
                row(&[(0, json!("A")), (1, json!("Bug"))]),
                row(&[(0, json!("B")), (2, json!("Open"))]),
            ]
        );
    }

    #[test]
    fn test_every_row_is_full_width() {
        let grid = RowGrid::from_tickets(&tickets(json!([
            {},
            { "activity": "last", "extra": "ignored" },
            { "name": "x", "details": "y", "cpmNumber": 7 }
        ])));
        assert_eq!(grid.row_count(), 4);
        assert!(grid.rows().iter().all(|r| r.len() == RowGrid::WIDTH));
        assert_eq!(grid.rows()[2][18], json!("last"));
        assert_eq!(grid.rows()[3][13], json!(7));
    }

    #[test]
    fn test_header_ignores_content() {
        let grid = RowGrid::from_tickets(&tickets(json!([{ "name": "Name" }])));
        assert_eq!(grid.rows()[0], expected_header());
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let input = tickets(json!([
            { "name": "A", "summary": "s", "client": "Acme Corp" },
            { "status": "On Hold", "pmrNumber": 42 }
        ]));
        assert_eq!(RowGrid::from_tickets(&input), RowGrid::from_tickets(&input));
    }
}
