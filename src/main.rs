mod app;
mod food;
mod game;
mod input;
mod score;
mod snake;
mod sound;
mod term;

pub type GridInt = i16;
pub type Cell = (GridInt, GridInt);

fn main() {
    // The app loop handles pause, restart and clean exit on CTRL+C itself.
    let mut app = app::App::new();
    app.run();
}
