use anyhow::anyhow;
use clap::Parser;
use folio_server::{FileSource, ResumeSource, StaticSource};
use std::path::PathBuf;
use tiny_http::Server;

#[derive(Parser)]
#[command(name = "folio-server")]
#[command(about = "Serves the one-page PDF resume at /api/generate-resume")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// JSON file to read resume data from instead of the built-in content
    #[arg(short, long)]
    data: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let source: Box<dyn ResumeSource> = match &args.data {
        Some(path) => {
            log::info!("[resume] reading data from {}", path.display());
            Box::new(FileSource::new(path))
        }
        None => Box::new(StaticSource),
    };

    let addr = format!("{}:{}", args.host, args.port);
    let server = Server::http(&addr).map_err(|e| anyhow!("binding {}: {}", addr, e))?;
    log::info!("[http] listening on http://{}", addr);

    folio_server::serve(&server, source.as_ref());
    Ok(())
}
