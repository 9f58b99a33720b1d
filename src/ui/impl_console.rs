use crate::mood_detector::core::Msg;
use crate::mood_detector::main::MoodDetector;
use crate::mood_detector::render::Screen;
use std::io::{self, BufRead, Write};

const WIDTH: usize = 32;

pub struct UiConsole {
    mood_detector: MoodDetector,
}

impl UiConsole {
    pub fn new(mood_detector: MoodDetector) -> Self {
        Self { mood_detector }
    }

    fn render_screen(screen: &Screen) {
        println!("┌{}┐", "─".repeat(WIDTH));
        for line in [
            format!("{} ({})", screen.image_name, screen.position),
            screen.result.clone(),
        ] {
            let text: String = line.chars().take(WIDTH).collect();
            println!("│{:<width$}│", text, width = WIDTH);
        }
        println!("└{}┘", "─".repeat(WIDTH));
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let stdin = io::stdin();

        loop {
            Self::render_screen(&self.mood_detector.screen());
            print!("[b]ack [n]ext [c]lassify [q]uit > ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }

            match parse_command(&line) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Send(msg)) => self.mood_detector.dispatch(msg),
                None => println!("Unknown command: {}", line.trim()),
            }
        }
    }
}

enum Command {
    Send(Msg),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "b" | "back" => Some(Command::Send(Msg::BackPressed)),
        "n" | "next" => Some(Command::Send(Msg::NextPressed)),
        "c" | "classify" => Some(Command::Send(Msg::ClassifyPressed)),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}
