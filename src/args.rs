use anyhow::{Context, Result};

const USAGE: &str = "usage: echoping <host>";

#[derive(Debug)]
pub struct PingArgs {
    pub host: String,
}

pub fn parse() -> Result<PingArgs> {
    parse_from(std::env::args().skip(1))
}

/// Accepts exactly one positional argument: a hostname or IPv4 literal.
pub fn parse_from<I>(args: I) -> Result<PingArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let host = args.next().context(USAGE)?;
    if host.is_empty() {
        anyhow::bail!("empty host\n{USAGE}");
    }
    if let Some(extra) = args.next() {
        anyhow::bail!("unexpected argument '{extra}'\n{USAGE}");
    }
    Ok(PingArgs { host })
}
