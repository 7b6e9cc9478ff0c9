//! Line-oriented command session over one game history.
//!
//! Keeps a cursor into a `GameHistory`, reads one command per line and
//! writes plain-text replies. All rules live in the library; this layer only
//! parses commands and moves the cursor.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::position::Position;
use crate::history::history_node::{GameHistory, NodeId};
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::move_notation::NotationStyle;

pub fn run_stdio_loop(notation: NotationStyle) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = SessionState::new(notation);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct SessionState {
    history: GameHistory,
    cursor: NodeId,
    notation: NotationStyle,
}

impl SessionState {
    pub fn new(notation: NotationStyle) -> Self {
        Self::from_position(Position::starting_position(), notation)
    }

    fn from_position(position: Position, notation: NotationStyle) -> Self {
        let history = GameHistory::with_notation(position, notation);
        let cursor = history.root();
        Self {
            history,
            cursor,
            notation,
        }
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    fn current_position(&self) -> Result<Position, ChessErrors> {
        self.history.position(self.cursor).copied()
    }

    /// Handle one command line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        debug!(%cmd, cursor = %self.cursor, "session command");

        match cmd {
            "fen" => match self.current_position() {
                Ok(position) => writeln!(out, "{}", position.to_fen())?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "error: {}", err)?;
                }
            }
            "move" => match parts.next() {
                Some(lan) => match self.handle_move(lan) {
                    Ok(notation) => writeln!(out, "{}", notation)?,
                    Err(err) => writeln!(out, "error: {}", err)?,
                },
                None => writeln!(out, "error: missing move")?,
            },
            "back" => match self.history.node(self.cursor).map(|node| node.parent_node()) {
                Ok(Some(parent)) => self.cursor = parent,
                Ok(None) => writeln!(out, "already at the first position")?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "forward" => match self.history.node(self.cursor).map(|node| node.main_line()) {
                Ok(Some(next)) => self.cursor = next,
                Ok(None) => writeln!(out, "no further moves")?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "variants" => self.write_variants(out)?,
            "goto" => {
                let index = parts.next().and_then(|text| text.parse::<usize>().ok());
                match index {
                    Some(index) => {
                        if let Err(err) = self.handle_goto(index) {
                            writeln!(out, "error: {}", err)?;
                        }
                    }
                    None => writeln!(out, "error: goto needs a child index")?,
                }
            }
            "promote" => {
                if let Err(err) = self.history.promote_this_line(self.cursor) {
                    writeln!(out, "error: {}", err)?;
                }
            }
            "delete" => match self.history.delete_this_line(self.cursor) {
                Ok(line_root) => self.cursor = line_root,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "moves" => match self.history.moves_from_root(self.cursor) {
                Ok(moves) => writeln!(out, "{}", moves.join(" "))?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "show" => match self.current_position() {
                Ok(position) => writeln!(out, "{}", position)?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            "quit" => {
                return Ok(true);
            }
            other => {
                writeln!(out, "unknown command '{}'", other)?;
            }
        }

        Ok(false)
    }

    fn handle_position(&mut self, line: &str) -> Result<(), ChessErrors> {
        let mut tokens = line.split_whitespace().peekable();
        let _ = tokens.next(); // "position"

        let position = match tokens.next() {
            Some("startpos") => Position::starting_position(),
            Some("fen") => {
                let mut fen_parts = Vec::new();
                while let Some(next) = tokens.peek() {
                    if *next == "moves" {
                        break;
                    }
                    fen_parts.extend(tokens.next());
                }
                Position::from_fen(&fen_parts.join(" "))?
            }
            Some(other) => return Err(ChessErrors::InvalidFen(format!("unsupported position token '{}'", other))),
            None => return Err(ChessErrors::InvalidFen("incomplete position command".to_owned())),
        };

        let mut session = Self::from_position(position, self.notation);
        if tokens.peek().copied() == Some("moves") {
            let _ = tokens.next();
            for lan in tokens {
                session.handle_move(lan)?;
            }
        }

        *self = session;
        Ok(())
    }

    fn handle_move(&mut self, lan: &str) -> Result<String, ChessErrors> {
        let side = self.current_position()?.side_to_move();
        let mv = long_algebraic_to_move(lan, side)?;
        let child = self.history.play_move(self.cursor, &mv)?;
        self.cursor = child;

        Ok(self
            .history
            .node(child)?
            .move_leading_to_this_node_fan()
            .unwrap_or_default()
            .to_owned())
    }

    /// `0` is the main line, `1..` are the variants in order.
    fn handle_goto(&mut self, index: usize) -> Result<(), ChessErrors> {
        let node = self.history.node(self.cursor)?;
        let len = node.children().count();
        let target = node
            .children()
            .nth(index)
            .ok_or(ChessErrors::VariationIndexOutOfRange { index, len })?;
        self.cursor = target;
        Ok(())
    }

    fn write_variants(&self, out: &mut impl Write) -> io::Result<()> {
        let node = match self.history.node(self.cursor) {
            Ok(node) => node,
            Err(err) => return writeln!(out, "error: {}", err),
        };

        for (index, child) in node.children().enumerate() {
            let notation = self
                .history
                .node(child)
                .ok()
                .and_then(|child| child.move_leading_to_this_node_fan())
                .unwrap_or("?");
            if index == 0 {
                writeln!(out, "{}: {} (main)", index, notation)?;
            } else {
                writeln!(out, "{}: {}", index, notation)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SessionState;
    use crate::utils::move_notation::NotationStyle;

    fn run(session: &mut SessionState, commands: &[&str]) -> String {
        let mut out = Vec::new();
        for command in commands {
            session.handle_command(command, &mut out).expect("write to Vec");
        }
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn plays_moves_and_reports_fen() {
        let mut session = SessionState::new(NotationStyle::Letters);
        let out = run(&mut session, &["move e2e4", "fen"]);
        assert_eq!(
            out,
            "e4\nrnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1\n"
        );
    }

    #[test]
    fn navigates_variants() {
        let mut session = SessionState::new(NotationStyle::Letters);
        let out = run(
            &mut session,
            &["move e2e4", "back", "move d2d4", "back", "variants", "goto 1", "moves"],
        );
        assert_eq!(out, "e4\nd4\n0: e4 (main)\n1: d4\nd4\n");

        let out = run(&mut session, &["promote", "back", "variants"]);
        assert_eq!(out, "0: d4 (main)\n1: e4\n");
    }

    #[test]
    fn delete_moves_cursor_to_line_root() {
        let mut session = SessionState::new(NotationStyle::Letters);
        run(&mut session, &["move e2e4", "move e7e5", "delete"]);
        assert_eq!(session.cursor(), session.history().root());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn position_command_resets_the_history() {
        let mut session = SessionState::new(NotationStyle::Figurine);
        let out = run(
            &mut session,
            &["move e2e4", "position fen r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1 moves e1g1", "moves", "fen"],
        );
        assert_eq!(out, "e4\nO-O\nr3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1\n");
    }

    #[test]
    fn errors_are_reported_not_fatal() {
        let mut session = SessionState::new(NotationStyle::Letters);
        let out = run(&mut session, &["move e2e5", "back", "goto 3", "bogus"]);
        assert!(out.starts_with("error: illegal move from e2 to e5\n"));
        assert!(out.contains("already at the first position\n"));
        assert!(out.contains("error: variation index 3 out of range"));
        assert!(out.ends_with("unknown command 'bogus'\n"));
        assert!(!run(&mut session, &["quit"]).contains("error"));
    }
}
