//! The two Elastic Disaster Recovery calls this tool makes, behind a trait so
//! the fetch and resolve logic can run against something other than AWS.

use crate::error::Error;
use async_trait::async_trait;
use aws_sdk_drs::operation::describe_source_servers::DescribeSourceServersOutput;
use aws_sdk_drs::operation::get_launch_configuration::GetLaunchConfigurationOutput;
use aws_sdk_drs::types::DescribeSourceServersRequestFilters;
use aws_sdk_drs::Client as DrsSdkClient;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Tag name to tag value.
pub type TagSet = HashMap<String, String>;

/// A source server as far as tag matching is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRecord {
    pub id: String,
    pub tags: TagSet,
}

impl ServerRecord {
    pub fn new(id: impl Into<String>, tags: TagSet) -> Self {
        Self {
            id: id.into(),
            tags,
        }
    }
}

/// One page of `DescribeSourceServers`. `next_token` is `None` on the last page.
#[derive(Debug, Clone, Default)]
pub struct ServerPage {
    pub records: Vec<ServerRecord>,
    pub next_token: Option<String>,
}

/// The part of `GetLaunchConfiguration` we read.
#[derive(Debug, Clone, Default)]
pub struct LaunchConfiguration {
    pub ec2_launch_template_id: Option<String>,
}

#[async_trait]
pub trait SourceServerApi: Send + Sync {
    /// Fetch one page of source servers with an empty filter.
    async fn describe_source_servers(
        &self,
        page_size: i32,
        next_token: Option<String>,
    ) -> Result<ServerPage, Error>;

    async fn get_launch_configuration(
        &self,
        source_server_id: &str,
    ) -> Result<LaunchConfiguration, Error>;
}

/// [`SourceServerApi`] backed by `aws-sdk-drs`.
pub struct DrsClient {
    client: DrsSdkClient,
}

impl DrsClient {
    pub fn new(config: &aws_types::SdkConfig) -> Self {
        Self {
            client: DrsSdkClient::new(config),
        }
    }
}

#[async_trait]
impl SourceServerApi for DrsClient {
    async fn describe_source_servers(
        &self,
        page_size: i32,
        next_token: Option<String>,
    ) -> Result<ServerPage, Error> {
        let resp = self
            .client
            .describe_source_servers()
            .filters(DescribeSourceServersRequestFilters::builder().build())
            .max_results(page_size)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| Error::remote("DescribeSourceServers", e))?;

        Ok(page_from_output(&resp))
    }

    async fn get_launch_configuration(
        &self,
        source_server_id: &str,
    ) -> Result<LaunchConfiguration, Error> {
        let resp = self
            .client
            .get_launch_configuration()
            .source_server_id(source_server_id)
            .send()
            .await
            .map_err(|e| Error::remote("GetLaunchConfiguration", e))?;

        debug!(
            source_server_id,
            template = ?resp.ec2_launch_template_id(),
            "fetched launch configuration"
        );

        Ok(launch_configuration_from_output(&resp))
    }
}

/// Keep servers that have an id. An empty continuation token ends paging.
fn page_from_output(resp: &DescribeSourceServersOutput) -> ServerPage {
    let records = resp
        .items()
        .iter()
        .filter_map(|server| match server.source_server_id() {
            Some(id) => Some(ServerRecord::new(
                id,
                server.tags().cloned().unwrap_or_default(),
            )),
            None => {
                warn!(arn = ?server.arn(), "skipping source server without an id");
                None
            }
        })
        .collect();

    ServerPage {
        records,
        next_token: resp
            .next_token()
            .filter(|token| !token.is_empty())
            .map(str::to_string),
    }
}

fn launch_configuration_from_output(resp: &GetLaunchConfigurationOutput) -> LaunchConfiguration {
    LaunchConfiguration {
        ec2_launch_template_id: resp.ec2_launch_template_id().map(str::to_string),
    }
}
