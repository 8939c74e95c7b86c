use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::{debug, trace};

use crate::types::{CollectResult, DependencyReport};

/// Renders `n` with `,` thousands separators.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Prints every chunk, each under a numbered header with its size.
pub fn print_chunks<W: Write>(writer: &mut W, result: &CollectResult) -> io::Result<()> {
    let chunks = &result.chunks;
    debug!("Printing {} chunks", chunks.len());
    for (idx, chunk) in chunks.iter().enumerate() {
        let chars = chunk.chars().count();
        let tokens = result.chunk_tokens.get(idx).copied().unwrap_or_default();
        trace!("Chunk {} has {} characters and {} tokens", idx + 1, chars, tokens);
        writeln!(
            writer,
            "{} ({} char, {} tokens)",
            format!("== Chunk {} of {} ==", idx + 1, chunks.len()).bold(),
            format_number(chars).cyan(),
            format_number(tokens).cyan()
        )?;
        writeln!(writer, "{}", chunk)?;
    }
    writer.flush()?;
    Ok(())
}

/// Prints the totals over all chunks, plus the chunk count and the budgets
/// that were exceeded when there is more than one chunk.
pub fn print_result<W: Write>(
    writer: &mut W,
    result: &CollectResult,
    max_char: usize,
    max_token: usize,
) -> io::Result<()> {
    let chunks = &result.chunks;
    let joined = chunks.concat();
    let total_char = joined.chars().count();
    let total_lines = joined.split('\n').count();
    debug!(
        "Result: {} characters, {} tokens, {} lines, {} chunks",
        total_char,
        result.total_tokens,
        total_lines,
        chunks.len()
    );

    writeln!(writer, "\n{}\n", "== Result ==".green().bold())?;
    writeln!(writer, "total characters: {}", format_number(total_char).yellow())?;
    writeln!(
        writer,
        "total tokens:     {} (encoded for gpt-4)",
        format_number(result.total_tokens).yellow()
    )?;
    writeln!(writer, "total lines:      {}", format_number(total_lines).yellow())?;
    if chunks.len() > 1 {
        writeln!(writer, "total chunks:     {}", format_number(chunks.len()).yellow())?;
        if max_char < total_char {
            writeln!(writer, "  ({} characters per chunk.)", format_number(max_char))?;
        }
        if max_token < result.total_tokens {
            writeln!(writer, "  ({} tokens per chunk.)", format_number(max_token))?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn print_saved<W: Write>(writer: &mut W, path: &Path) -> io::Result<()> {
    writeln!(writer, "\n{}\n", "== Write to file ==".green().bold())?;
    let shown = path.display().to_string();
    writeln!(writer, "{} {}", "Saved to File:".green(), shown.blue())?;
    writer.flush()?;
    Ok(())
}

/// Prints the dependency list one path per line, or as pretty JSON.
pub fn print_dependency_report<W: Write>(
    writer: &mut W,
    report: &DependencyReport,
    json: bool,
) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
    } else {
        for file in &report.files {
            writeln!(writer, "{}", file)?;
        }
    }
    writer.flush()?;
    Ok(())
}
