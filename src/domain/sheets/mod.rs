pub mod a1_notation;
pub mod row_grid;
