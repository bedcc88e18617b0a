// The terminal front end: commands, participant list and the name shuffle.

use std::io::{BufRead, Write};
use std::thread;

use crate::draw::*;

const HELP: &str = "Commands:
  load <file>   read a participant list (xlsx, xls, ods or csv)
  list          show the participants
  draw          draw the next prize (an empty line does the same)
  winners       show the prizes awarded so far
  help          show this message
  quit          leave";

#[derive(Eq, PartialEq, Debug, Clone)]
enum Command {
    Load(String),
    List,
    Draw,
    Winners,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((h, r)) => (h, r.trim()),
        None => (line, ""),
    };
    match head.to_lowercase().as_str() {
        "" | "draw" | "d" => Command::Draw,
        "load" | "l" if !rest.is_empty() => Command::Load(rest.to_string()),
        "list" | "ls" => Command::List,
        "winners" | "w" => Command::Winners,
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn console_err(e: std::io::Error) -> RaffleError {
    RaffleError::Console { source: e }
}

pub fn print_participants<W: Write>(session: &Session, out: &mut W) -> RaffleResult<()> {
    let reg = session.registry();
    if reg.is_empty() {
        writeln!(out, "No participants loaded.").map_err(console_err)?;
        return Ok(());
    }
    if let Some(src) = session.source() {
        writeln!(out, "From {}:", src).map_err(console_err)?;
    }
    for e in reg.list() {
        let mark = if session.engine().has_won(e) { "*" } else { " " };
        writeln!(out, "{} {}", mark, e.participant).map_err(console_err)?;
    }
    writeln!(out, "{} participants", reg.len()).map_err(console_err)?;
    Ok(())
}

pub fn print_winners<W: Write>(session: &Session, out: &mut W) -> RaffleResult<()> {
    let awarded = session.engine().awarded();
    if awarded.is_empty() {
        writeln!(out, "No prize awarded yet.").map_err(console_err)?;
    }
    for (prize, e) in awarded {
        writeln!(out, "{:>12}: {}", prize.title(), e.participant).map_err(console_err)?;
    }
    Ok(())
}

fn print_prompt<W: Write>(session: &Session, out: &mut W) -> RaffleResult<()> {
    let res = match session.next_action_label() {
        Some(label) => write!(out, "[Enter] {} > ", label),
        None => write!(out, "[all prizes awarded] > "),
    };
    res.map_err(console_err)?;
    out.flush().map_err(console_err)
}

/// Plays the animation of a draw, pausing `interval` between frames.
pub fn play_draw<W: Write>(
    draw: DrawInProgress,
    interval: Duration,
    out: &mut W,
) -> RaffleResult<()> {
    writeln!(out, "*** {} ***", draw.prize.title().to_uppercase()).map_err(console_err)?;
    if let Some(img) = &draw.image {
        writeln!(out, "({:?} {})", img.format, img.path.display()).map_err(console_err)?;
    }
    let mut width = 0;
    for frame in draw.frames {
        match frame {
            Frame::Shuffle(p) => {
                width = width.max(p.name.chars().count());
                write!(out, "\r{:<width$}", p.name, width = width).map_err(console_err)?;
                out.flush().map_err(console_err)?;
                if !interval.is_zero() {
                    thread::sleep(interval);
                }
            }
            Frame::Reveal(e) => {
                let text = e.participant.to_string();
                width = width.max(text.chars().count());
                writeln!(out, "\r{:<width$}", text, width = width).map_err(console_err)?;
            }
        }
    }
    Ok(())
}

/// Runs one draw and reports the outcome. Errors that leave the raffle usable are
/// printed and swallowed.
pub fn draw_next<W: Write>(session: &mut Session, out: &mut W) -> RaffleResult<()> {
    let interval = session.shuffle_config().interval;
    match session.start_draw() {
        Ok(draw) => play_draw(draw, interval, out),
        Err(e) => report(e, out),
    }
}

fn report<W: Write>(e: RaffleError, out: &mut W) -> RaffleResult<()> {
    if let RaffleError::Console { .. } = e {
        return Err(e);
    }
    warn!("{:?}", e);
    writeln!(out, "Error: {}", describe_error(&e)).map_err(console_err)
}

/// Reads commands until `quit` or the end of the input.
pub fn run_commands<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> RaffleResult<()> {
    writeln!(out, "Type 'help' for the list of commands.").map_err(console_err)?;
    print_prompt(session, out)?;
    for line_r in input.lines() {
        let line = line_r.map_err(console_err)?;
        debug!("run_commands: {:?}", line);
        match parse_command(&line) {
            Command::Quit => break,
            Command::Draw => draw_next(session, out)?,
            Command::Load(path) => {
                let source = InputSource {
                    input_type: None,
                    worksheet: None,
                    path,
                };
                match session.load(&source) {
                    Ok(n) => {
                        writeln!(out, "Loaded {} participants.", n).map_err(console_err)?;
                        print_participants(session, out)?;
                    }
                    Err(e) => report(e, out)?,
                }
            }
            Command::List => print_participants(session, out)?,
            Command::Winners => print_winners(session, out)?,
            Command::Help => writeln!(out, "{}", HELP).map_err(console_err)?,
            Command::Unknown(s) => {
                writeln!(out, "Unknown command {:?}. Type 'help'.", s).map_err(console_err)?
            }
        }
        print_prompt(session, out)?;
    }
    writeln!(out).map_err(console_err)?;
    Ok(())
}

/// Draws all the remaining prizes without waiting for commands. The first draw
/// that fails is reported and ends the run; the prizes already drawn stay awarded.
pub fn run_auto<W: Write>(session: &mut Session, out: &mut W) -> RaffleResult<()> {
    while session.next_action_label().is_some() {
        let interval = session.shuffle_config().interval;
        match session.start_draw() {
            Ok(draw) => play_draw(draw, interval, out)?,
            Err(e) => {
                report(e, out)?;
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(people: &[(&str, &str)]) -> Session {
        let shuffle = ShuffleConfig {
            ticks: 3,
            interval: Duration::from_millis(0),
        };
        let mut s = Session::new(PrizeImages::none(), shuffle, Some(5));
        let mut b = Builder::new();
        for (n, h) in people {
            b.add_participant_simple(n, h);
        }
        s.replace_registry(b.build().unwrap(), None);
        s
    }

    fn run(session: &mut Session, input: &str) -> String {
        let mut out: Vec<u8> = Vec::new();
        run_commands(session, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn commands() {
        assert_eq!(parse_command(""), Command::Draw);
        assert_eq!(parse_command("  DRAW "), Command::Draw);
        assert_eq!(
            parse_command("load my list.xlsx"),
            Command::Load("my list.xlsx".to_string())
        );
        assert_eq!(parse_command("load"), Command::Unknown("load".to_string()));
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn prompt_follows_the_stage() {
        let mut s = session_with(&[("Alice", "@a"), ("Bob", "@b"), ("Cara", "@c")]);
        let text = run(&mut s, "\n\n\n\nquit\n");
        assert!(text.contains("[Enter] Draw Third Place"));
        assert!(text.contains("[Enter] Draw Second Place"));
        assert!(text.contains("[Enter] Draw First Place"));
        assert!(text.contains("[all prizes awarded]"));
        assert!(text.contains("Error: Cannot draw: All the prizes have been awarded"));
        assert_eq!(s.engine().winners().len(), 3);
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let mut s = session_with(&[("Alice", "@a")]);
        let text = run(&mut s, "draw\ndraw\nload /nonexistent/list.csv\nwinners\n");
        assert!(text.contains("Error: Cannot draw: No participants left who have not already won"));
        assert!(text.contains("Error: Error opening CSV file /nonexistent/list.csv"));
        assert!(text.contains("Third Place: Alice - @a"));
        assert_eq!(s.engine().winners().len(), 1);
    }

    #[test]
    fn list_marks_winners() {
        let mut s = session_with(&[("Alice", "@a")]);
        draw_next(&mut s, &mut Vec::<u8>::new()).unwrap();
        let mut out: Vec<u8> = Vec::new();
        print_participants(&s, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "* Alice - @a\n1 participants\n"
        );
    }

    #[test]
    fn auto_draws_everything() {
        let mut s = session_with(&[("Alice", "@a"), ("Bob", "@b"), ("Cara", "@c"), ("Dan", "@d")]);
        let mut out: Vec<u8> = Vec::new();
        run_auto(&mut s, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("*** THIRD PLACE ***"));
        assert!(text.contains("*** FIRST PLACE ***"));
        assert!(s.engine().current_stage().is_terminal());
    }

    #[test]
    fn auto_reports_errors_and_stops() {
        let mut s = session_with(&[("Alice", "@a")]);
        let mut out: Vec<u8> = Vec::new();
        run_auto(&mut s, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("*** THIRD PLACE ***"));
        assert_eq!(
            text.matches("Error: Cannot draw: No participants left who have not already won")
                .count(),
            1
        );
        assert!(!text.contains("*** FIRST PLACE ***"));
        assert_eq!(s.engine().winners().len(), 1);
        assert_eq!(s.engine().current_stage().prize(), Some(Prize::Second));
    }

    #[test]
    fn auto_reports_image_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = Session::new(
            PrizeImages::from_directory(dir.path()),
            ShuffleConfig::DEFAULT,
            Some(5),
        );
        let mut b = Builder::new();
        b.add_participant_simple("Alice", "@a");
        s.replace_registry(b.build().unwrap(), None);
        let mut out: Vec<u8> = Vec::new();
        run_auto(&mut s, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: Cannot load the prize image"));
        assert!(s.engine().winners().is_empty());
    }
}
