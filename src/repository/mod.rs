pub mod csv_player_repository_impl;
