//! Stdin prompts and the id/name tables shown before each selection.

use std::io::{self, BufRead, Write};

use exporter_core::{DocEntry, Repo};

/// Prints `prompt` without a newline and reads one trimmed line from stdin.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn print_repos(repos: &[Repo]) {
    let rows: Vec<(&str, &str)> = repos
        .iter()
        .map(|repo| (repo.id.as_str(), repo.name.as_str()))
        .collect();
    print!("{}", format_table("ID", "Name", &rows));
}

pub fn print_docs(docs: &[DocEntry]) {
    let rows: Vec<(&str, &str)> = docs
        .iter()
        .map(|doc| (doc.id.as_str(), doc.title.as_str()))
        .collect();
    print!("{}", format_table("ID", "Title", &rows));
}

/// Two left-aligned columns, the first padded to its widest value.
fn format_table(id_header: &str, name_header: &str, rows: &[(&str, &str)]) -> String {
    let width = rows
        .iter()
        .map(|(id, _)| id.len())
        .chain([id_header.len()])
        .max()
        .unwrap_or(0);

    let mut out = format!("{id_header:width$}  {name_header}\n");
    for (id, name) in rows {
        out.push_str(&format!("{id:width$}  {name}\n"));
    }
    out
}
