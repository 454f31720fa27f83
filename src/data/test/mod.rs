mod destination;
mod game;
mod game_source;
mod release_announcement;
