//! In-memory stand-in for the DRS API.

#![allow(dead_code)]

use async_trait::async_trait;
use drstemplates::{Error, LaunchConfiguration, ServerPage, ServerRecord, SourceServerApi, TagSet};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Describe {
        page_size: i32,
        next_token: Option<String>,
    },
    LaunchConfiguration(String),
}

pub struct FakeDrs {
    servers: Vec<ServerRecord>,
    page_size: usize,
    templates: HashMap<String, Option<String>>,
    failing_servers: HashSet<String>,
    failing_describe: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeDrs {
    pub fn new(servers: Vec<ServerRecord>) -> Self {
        Self {
            servers,
            page_size: usize::MAX,
            templates: HashMap::new(),
            failing_servers: HashSet::new(),
            failing_describe: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve at most `page_size` records per page, whatever the caller asks for.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_template(mut self, server_id: &str, template_id: &str) -> Self {
        self.templates
            .insert(server_id.to_string(), Some(template_id.to_string()));
        self
    }

    pub fn without_template(mut self, server_id: &str) -> Self {
        self.templates.insert(server_id.to_string(), None);
        self
    }

    pub fn failing_lookup(mut self, server_id: &str) -> Self {
        self.failing_servers.insert(server_id.to_string());
        self
    }

    pub fn failing_describe(mut self) -> Self {
        self.failing_describe = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn describe_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Describe { .. }))
            .count()
    }

    pub fn lookup_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::LaunchConfiguration(id) => Some(id),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl SourceServerApi for FakeDrs {
    async fn describe_source_servers(
        &self,
        page_size: i32,
        next_token: Option<String>,
    ) -> Result<ServerPage, Error> {
        self.calls.lock().unwrap().push(Call::Describe {
            page_size,
            next_token: next_token.clone(),
        });

        if self.failing_describe {
            return Err(Error::Remote {
                operation: "DescribeSourceServers",
                message: "UnrecognizedClientException: invalid security token".to_string(),
            });
        }

        let start: usize = next_token.map(|t| t.parse().unwrap()).unwrap_or(0);
        let size = self.page_size.min(page_size as usize);
        let end = (start + size).min(self.servers.len());

        Ok(ServerPage {
            records: self.servers[start..end].to_vec(),
            next_token: (end < self.servers.len()).then(|| end.to_string()),
        })
    }

    async fn get_launch_configuration(
        &self,
        source_server_id: &str,
    ) -> Result<LaunchConfiguration, Error> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::LaunchConfiguration(source_server_id.to_string()));

        if self.failing_servers.contains(source_server_id) {
            return Err(Error::Remote {
                operation: "GetLaunchConfiguration",
                message: format!("ResourceNotFoundException: {}", source_server_id),
            });
        }

        Ok(LaunchConfiguration {
            ec2_launch_template_id: self.templates.get(source_server_id).cloned().flatten(),
        })
    }
}

pub fn tags(pairs: &[(&str, &str)]) -> TagSet {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn server(id: &str, pairs: &[(&str, &str)]) -> ServerRecord {
    ServerRecord::new(id, tags(pairs))
}

/// `count` servers named `s-0`, `s-1`, ... all tagged `env=prod`.
pub fn numbered_servers(count: usize) -> Vec<ServerRecord> {
    (0..count)
        .map(|i| server(&format!("s-{}", i), &[("env", "prod")]))
        .collect()
}
