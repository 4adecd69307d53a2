mod logging;
mod prompt;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use exporter_core::{parse_selection, DocEntry};
use exporter_engine::{
    Exporter, FetchSettings, ReqwestFetcher, YuqueClient, YUQUE_API_BASE,
};

use crate::logging::LogDestination;

/// Export documents from a hosted knowledge base to local Markdown, with
/// images and attachments downloaded beside them.
#[derive(Debug, Parser)]
#[command(name = "exporter")]
struct Args {
    /// Service API token.
    #[arg(long, env = "YUQUE_TOKEN", hide_env_values = true)]
    token: String,

    /// Directory the exported repositories are written into.
    #[arg(long, default_value = "./YuqueExport")]
    base_dir: PathBuf,

    /// Where log lines go.
    #[arg(long, value_enum, default_value = "terminal")]
    log: LogDestination,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::initialize(args.log);

    let settings = FetchSettings::default();
    let client = YuqueClient::new(YUQUE_API_BASE, &args.token, &settings)?;
    let fetcher = ReqwestFetcher::new(&settings, &args.token)?;
    run(&args, &client, &fetcher).await
}

async fn run(args: &Args, client: &YuqueClient, fetcher: &ReqwestFetcher) -> Result<()> {
    use exporter_engine::DocSource;

    let repos = client.list_repos().await?;
    prompt::print_repos(&repos);
    let answer = prompt::read_line("Repo ID(s): ")?;
    let chosen_repos = parse_selection(&answer)
        .resolve(&repos, |repo| repo.id.as_str())
        .map_err(|err| anyhow!("repository {err}"))?;

    let exporter = Exporter::new(&args.base_dir, client, fetcher);
    for repo in chosen_repos {
        let docs = client.list_docs(&repo.id).await?;
        println!("\n===== {}: {} docs =====", repo.name, docs.len());
        prompt::print_docs(&docs);
        let answer = prompt::read_line("Doc ID(s): ")?;
        let chosen: Vec<DocEntry> = parse_selection(&answer)
            .resolve(&docs, |doc| doc.id.as_str())
            .map_err(|err| anyhow!("document {err}"))?
            .into_iter()
            .cloned()
            .collect();

        let summary = exporter.export_repo(repo, &chosen).await;
        println!(
            "Exported {} of {} documents from {}",
            summary.exported.len(),
            chosen.len(),
            repo.name
        );
        for failure in &summary.failures {
            println!("  failed: {} ({})", failure.entry.title, failure.error);
        }
    }
    Ok(())
}
