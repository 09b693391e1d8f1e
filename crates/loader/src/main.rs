use clap::Parser;

#[tokio::main]
async fn main() {
    let args = loader::arguments::Arguments::parse();
    observe::tracing::initialize(&args.log_filter);
    tracing::info!("running loader with validated arguments:\n{}", args);
    if let Err(err) = loader::run(args).await {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
