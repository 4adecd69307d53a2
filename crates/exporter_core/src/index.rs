use crate::filename::encode_title;

/// Name of a repository's index file, placed next to the repository
/// directory: `{repo_name}.md`.
pub fn index_filename(repo_name: &str) -> String {
    format!("{repo_name}.md")
}

/// One index entry: display title verbatim, link target encoded the same
/// way as the exported document's filename.
pub fn index_line(repo_name: &str, title: &str) -> String {
    format!("- [{title}](./{repo_name}/{}.md)", encode_title(title))
}
