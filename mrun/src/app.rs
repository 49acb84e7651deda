use std::io::{self, BufRead, Write};

use cmrun::{
    algorithms,
    gameboard::{reconnect::reconnect, ser},
    solve, Maze,
};
use log::info;
use thiserror::Error;

use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// The interactive shell around the maze core. Holds at most one live maze;
/// a failed operation reports and leaves the previous maze untouched.
pub struct App {
    settings: Settings,
    seed: Option<u64>,
    maze: Option<Maze>,
}

impl App {
    pub fn new(settings: Settings, seed: Option<u64>) -> Self {
        App {
            settings,
            seed,
            maze: None,
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            self.show_menu()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };

            match line.trim().parse::<u32>() {
                Ok(0) => {
                    println!("Bye!");
                    break;
                }
                Ok(1) => self.generate(&mut lines)?,
                Ok(2) => self.load(&mut lines)?,
                Ok(3) if self.maze.is_some() => self.save(&mut lines)?,
                Ok(4) if self.maze.is_some() => self.display(),
                Ok(5) if self.maze.is_some() => self.escape(),
                _ => println!("Incorrect option. Please try again"),
            }
        }

        Ok(())
    }

    fn show_menu(&self) -> Result<(), AppError> {
        println!("1. Generate a new maze.");
        println!("2. Load a maze.");
        if self.maze.is_some() {
            println!("3. Save the maze.");
            println!("4. Display the maze.");
            println!("5. Find the escape.");
        }
        println!("0. Exit.");
        prompt()
    }

    fn generate(
        &mut self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<(), AppError> {
        println!("Please, enter the size of a maze");
        prompt()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        let line = line.trim();
        let size = if line.is_empty() {
            self.settings.get_default_size()
        } else {
            match line.parse::<i32>() {
                Ok(size) => size,
                Err(_) => {
                    println!("Incorrect option. Please try again");
                    return Ok(());
                }
            }
        };

        match algorithms::generate(size, self.seed) {
            Ok(maze) => {
                info!("generated a {0}x{0} maze", maze.size());
                println!("{}", maze.render(None));
                self.maze = Some(maze);
            }
            Err(err) => println!("Cannot generate the maze. {err}"),
        }
        Ok(())
    }

    fn load(
        &mut self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<(), AppError> {
        prompt()?;
        let Some(path) = lines.next().transpose()? else {
            return Ok(());
        };

        let board = match ser::load(path.trim()) {
            Ok(board) => board,
            Err(err) => {
                println!("{err}");
                return Ok(());
            }
        };

        // the live maze is replaced only once the graph is rebuilt
        match reconnect(board) {
            Ok(maze) => {
                info!("loaded a {0}x{0} maze", maze.size());
                self.maze = Some(maze);
            }
            Err(err) => println!("Cannot load the maze. {err}"),
        }
        Ok(())
    }

    fn save(&self, lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<(), AppError> {
        let Some(maze) = &self.maze else {
            return Ok(());
        };

        prompt()?;
        let Some(path) = lines.next().transpose()? else {
            return Ok(());
        };

        if let Err(err) = ser::save(maze, path.trim()) {
            println!("Cannot save the maze. {err}");
        }
        Ok(())
    }

    fn display(&self) {
        if let Some(maze) = &self.maze {
            println!("{}", maze.render(None));
        }
    }

    fn escape(&self) {
        let Some(maze) = &self.maze else {
            return;
        };

        match solve::escape(maze) {
            Ok(path) => println!("{}", maze.render(Some(&path))),
            Err(err) => println!("Cannot find the escape. {err}"),
        }
    }
}

fn prompt() -> Result<(), AppError> {
    print!(">");
    io::stdout().flush()?;
    Ok(())
}
