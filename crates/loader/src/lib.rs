//! Loads a user's algorithm submissions from the Prosperity API and renders
//! them, together with the opaque visualizer proxy, for the downstream
//! consumer. The command line rendition of the website's "Load from
//! Prosperity" form.

pub mod arguments;

use {
    crate::arguments::Arguments,
    anyhow::{Context, Result, bail, ensure},
    async_operation::{AsyncOperation, OperationState},
    chrono::{DateTime, Utc},
    futures::FutureExt,
    model::{AlgorithmSummary, AuthToken, Round, availability},
    prosperity_api::{AlgorithmFetching, FetchError, SubmissionsClient, http_client::HttpClientFactory},
    serde::Serialize,
    std::sync::Arc,
};

pub async fn run(args: Arguments) -> Result<()> {
    let token = AuthToken::new(args.id_token.clone());
    ensure_token_present(&token)?;
    ensure_selectable(args.round, Utc::now())?;

    let factory = HttpClientFactory::new(&args.http_client);
    let client = SubmissionsClient::with_base(&factory, args.prosperity_api_base.clone());
    let algorithms = load(Arc::new(client), token, args.round).await?;
    tracing::debug!(count = algorithms.len(), "loaded algorithms");

    println!("{}", render(&algorithms, &args.proxy)?);
    Ok(())
}

/// A fetch is only triggered with a usable token; whitespace-only tokens
/// count as empty, mirroring the guard on the submitting side.
fn ensure_token_present(token: &AuthToken) -> Result<()> {
    ensure!(
        !token.is_empty(),
        "the ID token must not be empty, pass --id-token or set ID_TOKEN"
    );
    Ok(())
}

/// Rounds only become selectable once they have opened; the fetcher itself
/// does not re-validate this.
fn ensure_selectable(round: Round, now: DateTime<Utc>) -> Result<()> {
    let open = availability(now)
        .into_iter()
        .any(|entry| entry.round == round && entry.selectable);
    ensure!(
        open,
        "{} is not open yet, submissions are available from {}",
        round.label(),
        round.open_from(),
    );
    Ok(())
}

/// Triggers one fetch through [`AsyncOperation`] and surfaces the settled
/// state: the sorted summaries on success, the stored error otherwise.
async fn load(
    fetcher: Arc<dyn AlgorithmFetching>,
    token: AuthToken,
    round: Round,
) -> Result<Vec<AlgorithmSummary>> {
    let operation = AsyncOperation::new(move || {
        let fetcher = Arc::clone(&fetcher);
        let token = token.clone();
        async move {
            fetcher
                .algorithms(&token, round)
                .await
                .map_err(Arc::<FetchError>::new)
        }
        .boxed()
    });

    operation.call().await.context("fetch invocation panicked")?;
    match operation.state() {
        OperationState::Success(algorithms) => Ok(algorithms),
        OperationState::Error(err) => bail!("loading algorithms failed: {err}"),
        OperationState::Idle | OperationState::Loading => {
            unreachable!("an awaited invocation has settled")
        }
    }
}

/// What the downstream "open in visualizer" consumer receives: the sorted
/// summaries plus the proxy string, which is not interpreted here.
#[derive(Serialize)]
struct Listing<'a> {
    proxy: &'a str,
    algorithms: &'a [AlgorithmSummary],
}

fn render(algorithms: &[AlgorithmSummary], proxy: &str) -> Result<String> {
    serde_json::to_string_pretty(&Listing { proxy, algorithms })
        .context("failed to serialize the algorithm listing")
}
