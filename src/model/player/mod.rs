pub mod player_record;
pub mod player_table;
