//! Interactive prompts.

use std::io::{self, BufRead, Write};

use degrees_data::Candidate;

/// Writes `prompt` and reads one trimmed line.
///
/// End of input reads as an empty line.
///
/// # Errors
///
/// Returns any I/O error from writing the prompt or reading the reply.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

/// Lists everyone sharing `name` and asks which one was meant.
///
/// Returns `None` for an empty reply.
///
/// # Errors
///
/// Returns any I/O error from the prompt.
pub fn choose_candidate<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &str,
    candidates: &[Candidate<'_>],
) -> io::Result<Option<String>> {
    writeln!(output, "Which '{name}'?")?;
    for candidate in candidates {
        writeln!(
            output,
            "ID: {}, Name: {}, Birth: {}",
            candidate.id,
            candidate.name,
            candidate.birth.unwrap_or_default()
        )?;
    }

    let choice = read_line(input, output, "Intended Person ID: ")?;
    Ok((!choice.is_empty()).then_some(choice))
}
