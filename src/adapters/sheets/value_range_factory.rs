use google_sheets4::api::ValueRange;

use crate::domain::sheets::row_grid::RowGrid;

pub trait ValueRangeFactory {
    fn from_grid(grid: &RowGrid) -> Self;
}

impl ValueRangeFactory for ValueRange {
    fn from_grid(grid: &RowGrid) -> Self {
        Self {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(grid.rows().to_vec()),
        }
    }
}
