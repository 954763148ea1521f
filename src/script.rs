//! Pointer event scripts replayed by the command-line front end.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! layout 0 0 200 200        # surface shown at 200x200 from the viewport origin
//! press 10 10
//! move 50 10
//! release outside           # released over the document, not the surface
//! eraser                    # toggle erase mode
//! touch press 50 10
//! touch move 60 12
//! touch release
//! repaint                   # wipe, already confirmed
//! ```

use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use scratchpad::Draw;
use scratchpad::input::{BoundingBox, PointerEvent, PointerKind};

/// One parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(PointerEvent),
    ToggleEraser,
    Layout(BoundingBox),
    Repaint,
}

/// A command with the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub line: usize,
    pub command: Command,
}

/// Parses a whole script, reporting the first bad line.
pub fn parse(source: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let command = parse_line(raw).with_context(|| format!("line {line}: '{}'", raw.trim()))?;
        if let Some(command) = command {
            steps.push(Step { line, command });
        }
    }
    Ok(steps)
}

fn parse_line(raw: &str) -> Result<Option<Command>> {
    let content = raw.split('#').next().unwrap_or_default();
    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    let (touch, tokens) = match tokens.split_first() {
        Some((&"touch", rest)) => (true, rest),
        _ => (false, tokens.as_slice()),
    };
    let (outside, tokens) = match tokens.split_last() {
        Some((&"outside", rest)) => (true, rest),
        _ => (false, tokens),
    };
    let (&name, args) = tokens
        .split_first()
        .ok_or_else(|| anyhow!("missing command"))?;

    let command = match name {
        "press" => pointer(PointerKind::Press, touch, args)?,
        "move" => pointer(PointerKind::Move, touch, args)?,
        "release" => pointer(PointerKind::Release, touch, args)?,
        "eraser" => {
            numbers(args, 0)?;
            Command::ToggleEraser
        }
        "layout" => {
            let values = numbers(args, 4)?;
            Command::Layout(BoundingBox::new(values[0], values[1], values[2], values[3]))
        }
        "repaint" => {
            numbers(args, 0)?;
            Command::Repaint
        }
        other => bail!("unknown command '{other}'"),
    };

    if !matches!(command, Command::Event(_)) && (touch || outside) {
        bail!("'{name}' does not take 'touch' or 'outside'");
    }

    Ok(Some(match command {
        Command::Event(event) if outside => Command::Event(event.on_document()),
        command => command,
    }))
}

fn pointer(kind: PointerKind, touch: bool, args: &[&str]) -> Result<Command> {
    let position = if kind == PointerKind::Release && args.is_empty() {
        None
    } else {
        let values = numbers(args, 2)?;
        Some((values[0], values[1]))
    };

    let event = match (touch, position) {
        (true, position) => PointerEvent::touch(kind, position.into_iter().collect()),
        (false, Some((x, y))) => PointerEvent::mouse(kind, x, y),
        (false, None) => PointerEvent::mouse(kind, 0.0, 0.0),
    };
    Ok(Command::Event(event))
}

fn numbers(args: &[&str], expected: usize) -> Result<Vec<f64>> {
    if args.len() != expected {
        bail!("expected {expected} numbers, got {}", args.len());
    }
    args.iter()
        .map(|arg| {
            arg.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| anyhow!("'{arg}' is not a number"))
        })
        .collect()
}

/// Feeds every step into `draw` in order.
pub fn replay(draw: &mut Draw, steps: &[Step]) -> Result<()> {
    for step in steps {
        match &step.command {
            Command::Event(event) => {
                let outcome = draw
                    .handle_event(event)
                    .with_context(|| format!("line {}: {:?} failed", step.line, event.kind))?;
                if !outcome.consumed {
                    debug!("line {}: {:?} ignored", step.line, event.kind);
                }
            }
            Command::ToggleEraser => {
                draw.switch_eraser_status();
            }
            Command::Layout(layout) => draw.set_layout(*layout),
            Command::Repaint => {
                draw.repaint(|| true)
                    .with_context(|| format!("line {}: repaint failed", step.line))?;
            }
        }

        let damage = draw.take_damage();
        if !damage.is_empty() {
            debug!("line {}: {} damaged region(s)", step.line, damage.len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scratchpad::input::EventTarget;

    #[test]
    fn parses_commands_and_skips_comments() {
        let steps = parse(
            "# warmup\n\
             press 10 10\n\
             \n\
             move 50.5 10   # drag\n\
             release outside\n\
             eraser\n\
             layout 0 0 200 200\n\
             repaint\n",
        )
        .unwrap();

        let lines: Vec<usize> = steps.iter().map(|step| step.line).collect();
        assert_eq!(lines, vec![2, 4, 5, 6, 7, 8]);
        assert_eq!(
            steps[1].command,
            Command::Event(PointerEvent::mouse(PointerKind::Move, 50.5, 10.0))
        );
        match &steps[2].command {
            Command::Event(event) => {
                assert_eq!(event.kind, PointerKind::Release);
                assert_eq!(event.target, EventTarget::Document);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(steps[3].command, Command::ToggleEraser);
        assert_eq!(
            steps[4].command,
            Command::Layout(BoundingBox::new(0.0, 0.0, 200.0, 200.0))
        );
    }

    #[test]
    fn parses_touch_events() {
        let steps = parse("touch press 1 2\ntouch release\n").unwrap();
        assert_eq!(
            steps[0].command,
            Command::Event(PointerEvent::touch(PointerKind::Press, vec![(1.0, 2.0)]))
        );
        assert_eq!(
            steps[1].command,
            Command::Event(PointerEvent::touch(PointerKind::Release, vec![]))
        );
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse("press 1 1\nmove 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));

        let err = parse("scribble 3 4").unwrap_err();
        assert!(format!("{err:#}").contains("unknown command 'scribble'"));

        assert!(parse("eraser outside").is_err());
        assert!(parse("touch repaint").is_err());
        assert!(parse("press x 1").is_err());
    }
}
