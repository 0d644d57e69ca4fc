//! Text-mode driver: read commands from stdin, play them through a
//! `GameSession`, print the board and results to stdout.

use std::io::{self, BufRead, Write};

use log::{LevelFilter, Metadata, Record};

use chess_rules::board::{PieceKind, Square};
use chess_rules::error::RulesError;
use chess_rules::session::GameSession;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Move {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    Moves(Square),
    Promote(PieceKind),
    NewGame,
    Board,
    History,
    Perft(u32),
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let unknown = || Command::Unknown(trimmed.to_string());
    let square = |s: &str| s.parse::<Square>().ok();
    let piece = |s: &str| {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PieceKind::from_char(c),
            _ => None,
        }
    };

    let cmd = match parts.as_slice() {
        ["new"] => Command::NewGame,
        ["board"] => Command::Board,
        ["history"] => Command::History,
        ["help"] => Command::Help,
        ["quit"] | ["exit"] => Command::Quit,
        ["moves", sq] => square(*sq).map_or_else(unknown, Command::Moves),
        ["promote", kind] => piece(*kind).map_or_else(unknown, Command::Promote),
        ["perft", depth] => depth.parse().map_or_else(|_| unknown(), Command::Perft),
        [from, to] | [from, to, _] if from.len() == 2 => {
            let promotion = match parts.get(2) {
                Some(kind) => match piece(*kind) {
                    Some(kind) => Some(kind),
                    None => return Some(unknown()),
                },
                None => None,
            };
            match (square(*from), square(*to)) {
                (Some(from), Some(to)) => Command::Move {
                    from,
                    to,
                    promotion,
                },
                _ => unknown(),
            }
        }
        // Long algebraic in one token: e2e4, e7e8q
        [mv] if mv.len() == 4 || mv.len() == 5 => {
            match (
                mv.get(0..2).and_then(square),
                mv.get(2..4).and_then(square),
                mv.get(4..),
            ) {
                (Some(from), Some(to), Some("")) => Command::Move {
                    from,
                    to,
                    promotion: None,
                },
                (Some(from), Some(to), Some(kind)) => match piece(kind) {
                    Some(kind) => Command::Move {
                        from,
                        to,
                        promotion: Some(kind),
                    },
                    None => unknown(),
                },
                _ => unknown(),
            }
        }
        _ => unknown(),
    };

    Some(cmd)
}

/// Plain stderr logger; the level comes from `CHESS_LOG`.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = std::env::var("CHESS_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

const HELP: &str = "\
commands:
  e2 e4 | e2e4        move a piece
  e7 e8 q | e7e8q     move and promote (q, r, b, n)
  promote q           finish a pending promotion
  moves e2            list legal destinations
  board | history     show the position or the moves so far
  perft 3             count move-tree leaves from here
  new | help | quit";

fn print_status(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    writeln!(out, "{}", session.board())?;
    let outcome = session.outcome();
    if outcome.is_over() {
        writeln!(out, "game over: {outcome}")
    } else if session.in_check().unwrap_or(false) {
        writeln!(out, "{} to move, in check", session.current_player())
    } else {
        writeln!(out, "{} to move", session.current_player())
    }
}

fn report_error(out: &mut impl Write, err: &RulesError) -> io::Result<()> {
    match err {
        RulesError::MissingPromotionChoice { .. } => {
            writeln!(out, "{err}; choose with: promote q|r|b|n")
        }
        _ if err.is_recoverable() => writeln!(out, "{err}"),
        _ => {
            log::error!("{err}");
            writeln!(out, "internal error: {err}")
        }
    }
}

/// Runs one command. Returns `false` when the driver should exit.
fn execute(out: &mut impl Write, session: &mut GameSession, cmd: Command) -> io::Result<bool> {
    match cmd {
        Command::Move {
            from,
            to,
            promotion,
        } => match session.choose_move(from, to, promotion) {
            Ok(played) => {
                writeln!(out, "{} played {}", played.record.color, played.record)?;
                print_status(out, session)?;
            }
            Err(err) => report_error(out, &err)?,
        },
        Command::Promote(kind) => match session.complete_promotion(kind) {
            Ok(played) => {
                writeln!(out, "{} played {}", played.record.color, played.record)?;
                print_status(out, session)?;
            }
            Err(err) => report_error(out, &err)?,
        },
        Command::Moves(square) => match session.select_piece(square) {
            Ok(targets) => {
                let list: Vec<String> = targets.iter().map(ToString::to_string).collect();
                if list.is_empty() {
                    writeln!(out, "no legal moves from {square}")?;
                } else {
                    writeln!(out, "{square}: {}", list.join(" "))?;
                }
            }
            Err(err) => report_error(out, &err)?,
        },
        Command::NewGame => {
            session.start_new_game();
            print_status(out, session)?;
        }
        Command::Board => print_status(out, session)?,
        Command::History => {
            let moves: Vec<String> = session.history().iter().map(ToString::to_string).collect();
            writeln!(out, "{}", moves.join(" "))?;
        }
        Command::Perft(depth) => match session.state().perft(depth) {
            Ok(nodes) => writeln!(out, "perft {depth}: {nodes}")?,
            Err(err) => report_error(out, &err)?,
        },
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
        Command::Unknown(line) => writeln!(out, "unknown command '{line}' (try help)")?,
    }
    Ok(true)
}

fn main() -> io::Result<()> {
    init_logging();
    log::debug!("chess_rules driver starting");

    let mut session = GameSession::new();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_status(&mut out, &session)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        if !execute(&mut out, &mut session, cmd)? {
            break;
        }
        out.flush()?;
    }
    Ok(())
}
