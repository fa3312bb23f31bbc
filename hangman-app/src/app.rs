use std::io::Write;

use anyhow::Result;
use hangman_core::{GameController, GuessEffect, login, register};
use hangman_persistence::SqliteStore;
use hangman_types::{HangmanError, Player};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{info, warn};

use crate::command::Command;
use crate::config::Config;
use crate::terminal::TerminalRenderer;

const HELP: &str = "\
Type a single letter to guess it.
  :new    deal a new word
  :stats  show your record
  :help   show this message
  :quit   leave the game";

/// Line-driven front end: account prompts first, then the guess loop.
pub struct App<I, W: Write> {
    store: SqliteStore,
    controller: GameController<SqliteStore, TerminalRenderer<W>>,
    input: Lines<I>,
}

impl<I, W> App<I, W>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(store: SqliteStore, config: &Config, input: I, output: W) -> Self {
        let renderer = TerminalRenderer::new(output, config.rules.miss_limit);
        let controller = GameController::new(store.clone(), renderer, config.rules);

        Self {
            store,
            controller,
            input: input.lines(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.say("=== HANGMAN ===");

        let Some(player) = self.authenticate().await? else {
            self.say("Goodbye!");
            return Ok(());
        };

        self.say(&format!("Welcome, {}!", player.display_name));
        if let Err(e) = self.controller.new_session(Some(player.id)).await {
            self.report(&e);
        }

        while let Some(line) = self.prompt("Guess a letter (:help for commands)").await? {
            match Command::parse(&line) {
                Command::Guess(letter) => self.guess(letter).await,
                Command::NewWord => {
                    if let Err(e) = self.controller.new_word().await {
                        self.report(&e);
                    }
                }
                Command::Stats => self.show_stats(&player).await,
                Command::Help => self.say(HELP),
                Command::Quit => break,
                Command::Unknown(input) => {
                    self.say(&format!("Didn't understand {:?}. Type :help.", input))
                }
            }
        }

        self.say("Goodbye!");
        Ok(())
    }

    /// `None` when the player quits or input ends before logging in.
    async fn authenticate(&mut self) -> Result<Option<Player>> {
        loop {
            let Some(choice) = self.prompt("Type 'login', 'register' or 'quit'").await? else {
                return Ok(None);
            };

            let register_new = match choice.trim().to_lowercase().as_str() {
                "login" | "l" => false,
                "register" | "r" => true,
                "quit" | "q" => return Ok(None),
                _ => {
                    self.say("Unknown choice");
                    continue;
                }
            };

            let Some(name) = self.prompt("User name").await? else {
                return Ok(None);
            };
            let Some(secret) = self.prompt("Password").await? else {
                return Ok(None);
            };

            let result = if register_new {
                register(&self.store, &name, &secret).await
            } else {
                login(&self.store, &name, &secret).await
            };

            match result {
                Ok(player) => return Ok(Some(player)),
                Err(e) => self.report(&e),
            }
        }
    }

    async fn guess(&mut self, letter: char) {
        match self.controller.guess(letter).await {
            Ok(GuessEffect::Ignored) => {
                let message = match self.controller.session() {
                    None => "No word in play. Type :new.".to_string(),
                    Some(session) if session.state().is_finished() => {
                        "Round over. Type :new for another word.".to_string()
                    }
                    Some(_) => format!("Already tried {}", letter.to_uppercase()),
                };
                self.say(&message);
            }
            Ok(_) => {}
            Err(e) => self.report(&e),
        }
    }

    async fn show_stats(&mut self, player: &Player) {
        match self.store.games().player_stats(player.id).await {
            Ok(stats) => {
                let mut lines = vec![
                    format!("Games played: {}", stats.games_played),
                    format!("Games won: {}", stats.games_won),
                ];
                if let Some(word) = stats.longest_solved_word {
                    lines.push(format!("Longest word solved: {}", word.to_uppercase()));
                }
                if let Some(word) = stats.most_frequent_word {
                    lines.push(format!("Most frequent word: {}", word.to_uppercase()));
                }
                self.say(&lines.join("\n"));
            }
            Err(e) => {
                warn!("Failed to load stats: {:#}", e);
                self.say("Couldn't load your stats right now.");
            }
        }
    }

    fn report(&mut self, error: &HangmanError) {
        if error.is_user_facing() {
            self.say(&error.to_string());
        } else {
            warn!("{}", error);
            self.say("Something went wrong, please try again.");
        }
    }

    fn say(&mut self, message: &str) {
        self.controller.renderer_mut().say(message);
    }

    async fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.controller.renderer_mut().prompt(message);
        let line = self.input.next_line().await?;
        if line.is_none() {
            info!("Input closed");
        }
        Ok(line)
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        self.controller.renderer()
    }
}
