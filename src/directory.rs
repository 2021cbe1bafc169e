use crate::drs::{ServerRecord, SourceServerApi};
use crate::error::Error;
use tracing::{debug, info, warn};

/// Records requested per `DescribeSourceServers` page.
pub const PAGE_SIZE: i32 = 1000;

/// Hard cap on servers read per run. Anything past it is dropped.
pub const MAX_SERVERS: usize = 1000;

/// Page through every source server, up to [`MAX_SERVERS`].
pub async fn fetch_all_servers<A>(api: &A) -> Result<Vec<ServerRecord>, Error>
where
    A: SourceServerApi + ?Sized,
{
    fetch_servers_capped(api, PAGE_SIZE, MAX_SERVERS).await
}

/// Page through source servers until the last page or until `max_servers`
/// records are held. The result never exceeds `max_servers`.
pub async fn fetch_servers_capped<A>(
    api: &A,
    page_size: i32,
    max_servers: usize,
) -> Result<Vec<ServerRecord>, Error>
where
    A: SourceServerApi + ?Sized,
{
    let mut servers = Vec::new();
    let mut next_token = None;
    let mut pages = 0usize;

    loop {
        let page = api.describe_source_servers(page_size, next_token).await?;
        pages += 1;
        debug!(page = pages, records = page.records.len(), "fetched source server page");
        servers.extend(page.records);

        if servers.len() >= max_servers {
            if servers.len() > max_servers || page.next_token.is_some() {
                warn!(
                    cap = max_servers,
                    "source server limit reached, remaining servers are ignored"
                );
            }
            servers.truncate(max_servers);
            break;
        }

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    info!(servers = servers.len(), pages, "fetched source servers");
    Ok(servers)
}
