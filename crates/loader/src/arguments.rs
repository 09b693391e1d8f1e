use {clap::Parser, model::Round, prosperity_api::http_client, url::Url};

#[derive(Parser)]
pub struct Arguments {
    #[clap(flatten)]
    pub http_client: http_client::Arguments,

    /// Prosperity ID token. On the Prosperity website it is stored in the
    /// local storage item ending in `.idToken`.
    #[clap(long, env)]
    pub id_token: String,

    /// The round to list submissions for, `ROUND0` (the tutorial) through
    /// `ROUND5`.
    #[clap(long, env, default_value = "ROUND0")]
    pub round: Round,

    /// Base URL of the Prosperity API.
    #[clap(
        long,
        env,
        default_value = prosperity_api::submissions::DEFAULT_API_BASE,
    )]
    pub prosperity_api_base: Url,

    /// "Open in visualizer" CORS Anywhere proxy. Carried through to the
    /// rendered listing untouched; only the downstream consumer interprets
    /// it.
    #[clap(
        long,
        env,
        default_value = "https://imc-prosperity-2-visualizer-cors-anywhere.jmerle.dev/",
    )]
    pub proxy: String,

    /// Filter directive controlling the log output.
    #[clap(long, env, default_value = "warn,loader=debug,prosperity_api=debug")]
    pub log_filter: String,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "id_token: SECRET")?;
        writeln!(f, "round: {}", self.round)?;
        writeln!(f, "prosperity_api_base: {}", self.prosperity_api_base)?;
        writeln!(f, "proxy: {}", self.proxy)?;
        writeln!(f, "log_filter: {}", self.log_filter)?;
        write!(f, "{}", self.http_client)?;
        Ok(())
    }
}
