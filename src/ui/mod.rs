pub mod charts;
pub mod map_view;
pub mod panels;
pub mod table;
