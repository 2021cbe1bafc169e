use crate::directory::fetch_all_servers;
use crate::drs::SourceServerApi;
use crate::error::Error;
use crate::tags::{build_index, match_by_tag, tag_name};
use tracing::{debug, info};

/// Ids of the source servers tagged with the tag named by `key`, from a fresh
/// directory snapshot.
pub async fn matching_servers<A>(api: &A, key: &str) -> Result<Vec<String>, Error>
where
    A: SourceServerApi + ?Sized,
{
    let servers = fetch_all_servers(api).await?;
    let index = build_index(servers);
    let matched = match_by_tag(key, &index);
    info!(tag = tag_name(key), matched = matched.len(), "matched source servers");
    Ok(matched)
}

/// Launch template ids for every server matching `key`.
///
/// One `GetLaunchConfiguration` call per server, in order. The first failure
/// aborts the whole resolution and nothing already resolved is returned.
pub async fn resolve_templates<A>(api: &A, key: &str) -> Result<Vec<String>, Error>
where
    A: SourceServerApi + ?Sized,
{
    let server_ids = matching_servers(api, key).await?;

    let mut templates = Vec::with_capacity(server_ids.len());
    for server_id in server_ids {
        let config = api.get_launch_configuration(&server_id).await?;
        let template_id = config
            .ec2_launch_template_id
            .ok_or_else(|| Error::MissingLaunchTemplate {
                server_id: server_id.clone(),
            })?;
        debug!(%server_id, %template_id, "resolved launch template");
        templates.push(template_id);
    }

    Ok(templates)
}
