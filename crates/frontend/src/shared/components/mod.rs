pub mod card_animated;
pub mod category_chips;
pub mod metric_grid;
pub mod page_header;
pub mod search_input;
pub mod stat_card;
